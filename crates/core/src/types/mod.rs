//! Core types for Harbor.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod email;
pub mod id;
pub mod order;
pub mod product;
pub mod status;
pub mod wishlist;

pub use cart::CartLine;
pub use email::{Email, EmailError};
pub use id::*;
pub use order::{
    NewOrder, NewOrderPayment, Order, OrderItem, OrderSummary, PaymentInfo, PaymentReceipt,
    PaymentRequest, ShippingAddress, Transaction, TransactionRef,
};
pub use product::{Product, ProductGeneral, ProductInventory, ProductPricing};
pub use status::*;
pub use wishlist::WishlistEntry;
