//! Core types for the inventory service.

pub mod auth;
pub mod id;
pub mod item;

pub use auth::{Credentials, MessageResponse, Principal};
pub use id::*;
pub use item::{Item, ItemDto, NewItem};
