//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health               - Liveness check
//! GET    /health/ready         - Readiness check (store reachable)
//!
//! # Items
//! GET    /items                - List all items
//! GET    /items/{id}           - Get one item (404 if absent)
//! POST   /items                - Create item (body id ignored)
//! PUT    /items/{id}           - Update item (path id wins, 404 if absent)
//! DELETE /items/{id}           - Delete item (idempotent)
//!
//! # Auth
//! POST   /auth/login           - Credential check (no token issued)
//! ```

pub mod auth;
pub mod items;

use axum::{
    Router,
    routing::{get, post},
};

use crate::db::ItemRepository;
use crate::state::AppState;

/// Create the item routes router.
pub fn item_routes<R: ItemRepository>() -> Router<AppState<R>> {
    Router::new()
        .route("/", get(items::index::<R>).post(items::create::<R>))
        .route(
            "/{id}",
            get(items::show::<R>)
                .put(items::update::<R>)
                .delete(items::delete::<R>),
        )
}

/// Create the auth routes router.
pub fn auth_routes<R: ItemRepository>() -> Router<AppState<R>> {
    Router::new().route("/login", post(auth::login::<R>))
}

/// Create all API routes.
pub fn routes<R: ItemRepository>() -> Router<AppState<R>> {
    Router::new()
        .nest("/items", item_routes())
        .nest("/auth", auth_routes())
}
