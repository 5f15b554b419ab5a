//! Process-local item repository.
//!
//! Mirrors the `PostgreSQL` store's contract: ids come from a monotonic
//! counter and are never handed out twice, even after the item is deleted.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use inventory_core::{Item, ItemId, NewItem};

use super::{ItemRepository, RepositoryError};

/// In-memory item repository.
///
/// Cheap to clone; clones share the same store.
#[derive(Clone, Default)]
pub struct MemoryItemRepository {
    inner: Arc<RwLock<MemoryStore>>,
}

#[derive(Default)]
struct MemoryStore {
    items: BTreeMap<ItemId, Item>,
    /// Last id handed out
    last_id: i32,
}

impl MemoryItemRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    /// Whether the store holds no items.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.items.is_empty()
    }
}

impl ItemRepository for MemoryItemRepository {
    async fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.inner.read().await.items.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        Ok(self.inner.read().await.items.get(&id).cloned())
    }

    async fn create(&self, item: NewItem) -> Result<Item, RepositoryError> {
        let mut store = self.inner.write().await;

        let next = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Conflict("item id space exhausted".to_owned()))?;
        store.last_id = next;

        let item = Item {
            id: ItemId::new(next),
            name: item.name,
            description: item.description,
        };
        store.items.insert(item.id, item.clone());

        Ok(item)
    }

    async fn update(&self, item: &Item) -> Result<(), RepositoryError> {
        let mut store = self.inner.write().await;

        let existing = store
            .items
            .get_mut(&item.id)
            .ok_or(RepositoryError::NotFound)?;
        existing.name.clone_from(&item.name);
        existing.description.clone_from(&item.description);

        Ok(())
    }

    async fn delete(&self, id: ItemId) -> Result<(), RepositoryError> {
        if self.inner.write().await.items.remove(&id).is_none() {
            tracing::debug!(item_id = %id, "Delete of missing item ignored");
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn new_item(name: &str, description: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = MemoryItemRepository::new();

        let first = repo.create(new_item("Widget", "A widget")).await.unwrap();
        let second = repo.create(new_item("Gadget", "A gadget")).await.unwrap();

        assert_eq!(first.id, ItemId::new(1));
        assert_eq!(second.id, ItemId::new(2));
        assert_eq!(first.name, "Widget");
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let repo = MemoryItemRepository::new();
        let created = repo.create(new_item("Widget", "A widget")).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let repo = MemoryItemRepository::new();
        assert_eq!(repo.get_by_id(ItemId::new(42)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = MemoryItemRepository::new();
        let first = repo.create(new_item("a", "a")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(new_item("b", "b")).await.unwrap();
        assert_eq!(second.id, ItemId::new(2));
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let repo = MemoryItemRepository::new();
        let created = repo.create(new_item("Widget", "A widget")).await.unwrap();

        let changed = Item {
            id: created.id,
            name: "Widget2".to_string(),
            description: "Updated".to_string(),
        };
        repo.update(&changed).await.unwrap();

        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(changed));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_and_leaves_store_unchanged() {
        let repo = MemoryItemRepository::new();
        let created = repo.create(new_item("Widget", "A widget")).await.unwrap();

        let ghost = Item {
            id: ItemId::new(99),
            name: "Ghost".to_string(),
            description: "Nope".to_string(),
        };
        let result = repo.update(&ghost).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
        assert_eq!(repo.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let repo = MemoryItemRepository::new();
        repo.create(new_item("Widget", "A widget")).await.unwrap();

        repo.delete(ItemId::new(42)).await.unwrap();
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_counts_live_items_in_id_order() {
        let repo = MemoryItemRepository::new();
        for name in ["c", "a", "b"] {
            repo.create(new_item(name, "")).await.unwrap();
        }
        repo.delete(ItemId::new(2)).await.unwrap();

        let ids: Vec<i32> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|item| item.id.as_i32())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = MemoryItemRepository::new();
        let clone = repo.clone();
        clone.create(new_item("Widget", "")).await.unwrap();

        assert!(!repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_updates_have_no_conflict_detection() {
        let repo = MemoryItemRepository::new();
        let created = repo.create(new_item("Widget", "A widget")).await.unwrap();

        let left = Item {
            description: "left".to_string(),
            ..created.clone()
        };
        let right = Item {
            description: "right".to_string(),
            ..created.clone()
        };

        let (a, b) = tokio::join!(repo.update(&left), repo.update(&right));
        a.unwrap();
        b.unwrap();

        let stored = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert!(stored == left || stored == right);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_later_update_wins() {
        let repo = MemoryItemRepository::new();
        let created = repo.create(new_item("Widget", "A widget")).await.unwrap();

        for description in ["first", "second"] {
            let changed = Item {
                description: description.to_string(),
                ..created.clone()
            };
            repo.update(&changed).await.unwrap();
        }

        let stored = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.description, "second");
    }
}
