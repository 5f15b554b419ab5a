//! Item CRUD handlers.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use inventory_core::{ItemDto, ItemId};

use crate::db::ItemRepository;
use crate::error::{AppError, Result};
use crate::services::items::ItemService;
use crate::state::AppState;

/// `GET /items`
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn index<R: ItemRepository>(State(state): State<AppState<R>>) -> Result<Json<Vec<ItemDto>>> {
    let items = ItemService::new(state.items()).list().await?;
    Ok(Json(items))
}

/// `GET /items/{id}`
///
/// # Errors
///
/// Returns 404 if the item does not exist.
pub async fn show<R: ItemRepository>(
    State(state): State<AppState<R>>,
    path: std::result::Result<Path<ItemId>, PathRejection>,
) -> Result<Json<ItemDto>> {
    let Path(id) = path?;

    ItemService::new(state.items())
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Item {id}")))
}

/// `POST /items`
///
/// Any `id` in the body is ignored.
///
/// # Errors
///
/// Returns 400 for a malformed body, or an error if the store fails.
pub async fn create<R: ItemRepository>(
    State(state): State<AppState<R>>,
    body: std::result::Result<Json<ItemDto>, JsonRejection>,
) -> Result<Json<ItemDto>> {
    let Json(dto) = body?;
    let created = ItemService::new(state.items()).create(dto).await?;
    Ok(Json(created))
}

/// `PUT /items/{id}`
///
/// The path id always wins over any `id` in the body.
///
/// # Errors
///
/// Returns 404 if the item does not exist, 400 for a malformed request.
pub async fn update<R: ItemRepository>(
    State(state): State<AppState<R>>,
    path: std::result::Result<Path<ItemId>, PathRejection>,
    body: std::result::Result<Json<ItemDto>, JsonRejection>,
) -> Result<Json<ItemDto>> {
    let Path(id) = path?;
    let Json(dto) = body?;

    let updated = ItemService::new(state.items())
        .update(dto.with_id(id))
        .await?;
    Ok(Json(updated))
}

/// `DELETE /items/{id}`
///
/// Succeeds whether or not the item existed.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn delete<R: ItemRepository>(
    State(state): State<AppState<R>>,
    path: std::result::Result<Path<ItemId>, PathRejection>,
) -> Result<StatusCode> {
    let Path(id) = path?;
    ItemService::new(state.items()).delete(id).await?;
    Ok(StatusCode::OK)
}
