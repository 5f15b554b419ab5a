//! `PostgreSQL` item repository against a real database.
//!
//! Skipped unless `INVENTORY_TEST_DATABASE_URL` points at a database the
//! tests may migrate and write to.

#![allow(clippy::unwrap_used)]

use inventory_core::{Item, ItemId, NewItem};
use inventory_server::db::{self, ItemRepository, PgItemRepository, RepositoryError};
use secrecy::SecretString;

async fn repository() -> Option<PgItemRepository> {
    let url = std::env::var("INVENTORY_TEST_DATABASE_URL").ok()?;
    let pool = db::create_pool(&SecretString::from(url)).await.unwrap();
    db::run_migrations(&pool).await.unwrap();
    Some(PgItemRepository::new(pool))
}

fn new_item(name: &str) -> NewItem {
    NewItem {
        name: format!("{name}-{}", uuid::Uuid::new_v4()),
        description: "integration test item".to_string(),
    }
}

#[tokio::test]
async fn test_create_get_update_delete() {
    let Some(repo) = repository().await else {
        return;
    };

    let created = repo.create(new_item("widget")).await.unwrap();
    assert!(created.id.as_i32() > 0);

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, Some(created.clone()));

    let changed = Item {
        description: "updated".to_string(),
        ..created.clone()
    };
    repo.update(&changed).await.unwrap();
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(changed));

    repo.delete(created.id).await.unwrap();
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), None);

    // Deleting again is not an error.
    repo.delete(created.id).await.unwrap();
}

#[tokio::test]
async fn test_update_missing_row() {
    let Some(repo) = repository().await else {
        return;
    };

    let ghost = Item {
        id: ItemId::new(i32::MAX),
        name: "ghost".to_string(),
        description: "never stored".to_string(),
    };
    assert!(matches!(
        repo.update(&ghost).await,
        Err(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn test_ids_increase() {
    let Some(repo) = repository().await else {
        return;
    };

    let first = repo.create(new_item("first")).await.unwrap();
    repo.delete(first.id).await.unwrap();
    let second = repo.create(new_item("second")).await.unwrap();
    assert!(second.id > first.id);

    repo.delete(second.id).await.unwrap();
    repo.ping().await.unwrap();
}
