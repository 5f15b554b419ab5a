//! Item records and their wire representation.
//!
//! [`Item`] is the in-process record the store hands back; [`ItemDto`] is the
//! shape that crosses the HTTP boundary. The two mirror each other field for
//! field and convert through `From` in both directions.

use serde::{Deserialize, Serialize};

use super::id::ItemId;

/// A stored inventory item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Store-assigned identity, never reused.
    pub id: ItemId,
    pub name: String,
    pub description: String,
}

/// An item that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

/// External item representation.
///
/// On input the `id` may be omitted; it defaults to `0` and is ignored on
/// create and replaced by the path id on update. `name` and `description`
/// must be present but may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDto {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    pub description: String,
}

impl ItemDto {
    /// Build a DTO with no meaningful id, as sent by clients on create.
    #[must_use]
    pub fn unsaved(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ItemId::default(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Replace the id with an authoritative one (the request path on update).
    #[must_use]
    pub const fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    /// Drop the id, keeping only the client-supplied fields.
    #[must_use]
    pub fn into_new_item(self) -> NewItem {
        NewItem {
            name: self.name,
            description: self.description,
        }
    }
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}

impl From<ItemDto> for Item {
    fn from(dto: ItemDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_wire_shape() {
        let dto = ItemDto {
            id: ItemId::new(3),
            name: "Widget".to_string(),
            description: "A widget".to_string(),
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": 3, "name": "Widget", "description": "A widget" })
        );
    }

    #[test]
    fn test_dto_id_is_optional_on_input() {
        let dto: ItemDto =
            serde_json::from_str(r#"{"name":"Widget","description":"A widget"}"#).unwrap();
        assert_eq!(dto.id, ItemId::default());
        assert_eq!(dto.name, "Widget");
    }

    #[test]
    fn test_dto_requires_name_and_description() {
        assert!(serde_json::from_str::<ItemDto>(r#"{"name":"Widget"}"#).is_err());
        assert!(serde_json::from_str::<ItemDto>(r#"{"description":"x"}"#).is_err());
    }

    #[test]
    fn test_dto_accepts_empty_strings() {
        let dto: ItemDto = serde_json::from_str(r#"{"name":"","description":""}"#).unwrap();
        assert!(dto.name.is_empty());
        assert!(dto.description.is_empty());
    }

    #[test]
    fn test_with_id_overrides_body_id() {
        let dto = ItemDto {
            id: ItemId::new(99),
            name: "n".to_string(),
            description: "d".to_string(),
        }
        .with_id(ItemId::new(1));
        assert_eq!(dto.id, ItemId::new(1));
    }

    #[test]
    fn test_into_new_item_strips_id() {
        let new_item = ItemDto {
            id: ItemId::new(99),
            name: "Widget".to_string(),
            description: "A widget".to_string(),
        }
        .into_new_item();
        assert_eq!(
            new_item,
            NewItem {
                name: "Widget".to_string(),
                description: "A widget".to_string(),
            }
        );
    }

    #[test]
    fn test_item_dto_mapping_copies_every_field() {
        let item = Item {
            id: ItemId::new(5),
            name: "Bolt".to_string(),
            description: "M6".to_string(),
        };
        let dto = ItemDto::from(item.clone());
        assert_eq!(Item::from(dto), item);
    }
}
