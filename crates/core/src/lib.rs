//! Harbor Core - Shared types library.
//!
//! This crate provides common types used across all Harbor components:
//! - `client` - SDK for the marketplace HTTP API and local shopping state
//! - `cli` - Command-line storefront client
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! persistence. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, statuses, and the cart, wishlist, order, and
//!   product data model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
