//! Item service.
//!
//! The only place that converts between stored [`Item`] records and the
//! [`ItemDto`] shape exposed over HTTP. No defaulting or validation happens
//! here beyond identity handling.

use thiserror::Error;

use inventory_core::{Item, ItemDto, ItemId};

use crate::db::{ItemRepository, RepositoryError};

/// Errors that can occur during item operations.
#[derive(Debug, Error)]
pub enum ItemError {
    /// Update targeted an id that does not exist.
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Item service.
pub struct ItemService<'a, R> {
    items: &'a R,
}

impl<'a, R: ItemRepository> ItemService<'a, R> {
    /// Create a new item service over a repository.
    #[must_use]
    pub const fn new(items: &'a R) -> Self {
        Self { items }
    }

    /// All items.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::Repository` if the store fails.
    pub async fn list(&self) -> Result<Vec<ItemDto>, ItemError> {
        let items = self.items.list().await?;
        Ok(items.into_iter().map(ItemDto::from).collect())
    }

    /// One item, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::Repository` if the store fails.
    pub async fn get_by_id(&self, id: ItemId) -> Result<Option<ItemDto>, ItemError> {
        let item = self.items.get_by_id(id).await?;
        Ok(item.map(ItemDto::from))
    }

    /// Create an item. Any id on `dto` is discarded; the returned DTO carries
    /// the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::Repository` if the store fails.
    pub async fn create(&self, dto: ItemDto) -> Result<ItemDto, ItemError> {
        let created = self.items.create(dto.into_new_item()).await?;
        tracing::info!(item_id = %created.id, "Item created");
        Ok(created.into())
    }

    /// Overwrite name and description of the item `dto.id`.
    ///
    /// Returns `dto` unchanged on success; storage is not re-read.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::NotFound` if no item has `dto.id`.
    /// Returns `ItemError::Repository` if the store fails.
    pub async fn update(&self, dto: ItemDto) -> Result<ItemDto, ItemError> {
        let item = Item::from(dto.clone());
        self.items.update(&item).await.map_err(|e| match e {
            RepositoryError::NotFound => ItemError::NotFound(item.id),
            other => ItemError::Repository(other),
        })?;
        tracing::info!(item_id = %item.id, "Item updated");
        Ok(dto)
    }

    /// Delete an item. Deleting a missing id succeeds.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::Repository` if the store fails.
    pub async fn delete(&self, id: ItemId) -> Result<(), ItemError> {
        self.items.delete(id).await?;
        tracing::info!(item_id = %id, "Item deleted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::MemoryItemRepository;

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let repo = MemoryItemRepository::new();
        let service = ItemService::new(&repo);

        let dto = ItemDto::unsaved("Widget", "A widget").with_id(ItemId::new(500));
        let created = service.create(dto).await.unwrap();

        assert_eq!(created.id, ItemId::new(1));
        assert_eq!(created.name, "Widget");
        assert_eq!(created.description, "A widget");
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = MemoryItemRepository::new();
        let service = ItemService::new(&repo);

        let created = service
            .create(ItemDto::unsaved("Widget", "A widget"))
            .await
            .unwrap();
        let fetched = service.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let repo = MemoryItemRepository::new();
        let service = ItemService::new(&repo);

        assert_eq!(service.get_by_id(ItemId::new(7)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_returns_input_and_persists() {
        let repo = MemoryItemRepository::new();
        let service = ItemService::new(&repo);
        let created = service
            .create(ItemDto::unsaved("Widget", "A widget"))
            .await
            .unwrap();

        let input = ItemDto::unsaved("Widget2", "Updated").with_id(created.id);
        let returned = service.update(input.clone()).await.unwrap();
        assert_eq!(returned, input);

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Widget2");
        assert_eq!(fetched.description, "Updated");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = MemoryItemRepository::new();
        let service = ItemService::new(&repo);

        let result = service
            .update(ItemDto::unsaved("x", "y").with_id(ItemId::new(3)))
            .await;

        assert!(matches!(result, Err(ItemError::NotFound(id)) if id == ItemId::new(3)));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = MemoryItemRepository::new();
        let service = ItemService::new(&repo);
        let created = service.create(ItemDto::unsaved("a", "b")).await.unwrap();

        service.delete(created.id).await.unwrap();
        assert_eq!(service.get_by_id(created.id).await.unwrap(), None);

        service.delete(created.id).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_maps_every_item() {
        let repo = MemoryItemRepository::new();
        let service = ItemService::new(&repo);
        service.create(ItemDto::unsaved("a", "1")).await.unwrap();
        service.create(ItemDto::unsaved("b", "2")).await.unwrap();

        let names: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|dto| dto.name)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
