//! CLI subcommand implementations.

pub mod auth;
pub mod items;
pub mod migrate;
