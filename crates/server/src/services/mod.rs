//! Business logic services.
//!
//! Services sit between route handlers and repositories:
//!
//! - [`items`] - Maps stored items to their external representation
//! - [`auth`] - Credential verification for the login endpoint

pub mod auth;
pub mod items;
