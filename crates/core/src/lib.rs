//! Inventory Core - Shared domain types.
//!
//! This crate provides the types shared by every inventory component:
//! - `server` - HTTP API over the item store
//! - `client` - HTTP data clients used by front ends
//! - `cli` - Terminal front end and migration runner
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Item records, the item wire shape, login payloads, and type-safe IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
