//! Inventory server library.
//!
//! This crate provides the item API as a library, allowing it to be tested
//! and embedded. The `inventory-server` binary wires it to configuration,
//! logging, and a listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
