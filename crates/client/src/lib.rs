//! Harbor Client - marketplace SDK.
//!
//! This crate is the client side of the Harbor marketplace: locally
//! persisted shopping state (cart, wishlist) and a typed HTTP client for
//! the marketplace REST API (auth, catalog, payments, orders, dashboards).
//!
//! # Architecture
//!
//! - Stores ([`cart::CartStore`], [`wishlist::WishlistStore`]) are explicit
//!   objects over a [`storage::Storage`] backend, constructed and injected
//!   by the caller. Every mutation persists synchronously.
//! - The [`api::ApiClient`] holds no mutable state: each method is a single
//!   request/response exchange, no retries, no caching. A failed call is
//!   re-initiated by the caller.
//! - Stock limits are enforced *before* store mutation by [`stock`], never
//!   inside the cart itself.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod stock;
pub mod storage;
pub mod wishlist;

pub use api::{ApiClient, ApiError};
pub use cart::{CartProduct, CartStore, QuantityUpdate};
pub use checkout::{CheckoutDetails, CheckoutError};
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, Result};
pub use stock::{StockError, check_purchase, check_stock};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use wishlist::{WishlistAdd, WishlistStore};
