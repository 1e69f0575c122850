//! The shopping cart store.
//!
//! [`CartStore`] owns the collection of [`CartLine`]s, keyed by product id,
//! and writes it back to storage after every mutation. The store trusts its
//! inputs: stock limits are checked by the caller (see [`crate::stock`])
//! before any mutation, and quantities are never validated against the
//! catalog here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use harbor_core::{CartLine, ProductId};

use crate::storage::{self, Storage, StorageError, keys};

/// Product data needed to open a cart line: everything but the quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartProduct {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub image: Option<String>,
    pub attributes: Option<String>,
}

/// Result of a quantity update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// The line's quantity was set and persisted.
    Updated,
    /// The requested quantity was zero. The store did not mutate: dropping
    /// a line is a two-step operation, confirmed by calling
    /// [`CartStore::remove`].
    RemovalRequired,
    /// No line with that product id exists.
    NotInCart,
}

/// Persistent shopping cart.
///
/// Invariants:
/// - at most one line per product id;
/// - every line's quantity is at least 1 (a zero quantity is never stored).
pub struct CartStore {
    lines: Vec<CartLine>,
    storage: Box<dyn Storage>,
}

impl CartStore {
    /// Load the cart from storage.
    ///
    /// Malformed persisted content is discarded and the cart starts empty.
    #[must_use]
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let lines = storage::load_array(storage.as_ref(), keys::CART);
        Self { lines, storage }
    }

    /// Add `quantity` units of a product.
    ///
    /// If a line for the product already exists its quantity is incremented;
    /// otherwise a new line is appended. Stock limits are the caller's
    /// responsibility.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails.
    pub fn add(&mut self, product: CartProduct, quantity: u32) -> Result<(), StorageError> {
        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.product_id)
        {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                product_id: product.product_id,
                name: product.name,
                unit_price: product.unit_price,
                quantity,
                image: product.image,
                attributes: product.attributes,
            }),
        }
        self.persist()
    }

    /// Set a line's quantity.
    ///
    /// A requested quantity of zero does not remove the line - it returns
    /// [`QuantityUpdate::RemovalRequired`] without mutating, and the caller
    /// confirms the removal with [`Self::remove`].
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<QuantityUpdate, StorageError> {
        if quantity == 0 {
            return Ok(if self.find(product_id).is_some() {
                QuantityUpdate::RemovalRequired
            } else {
                QuantityUpdate::NotInCart
            });
        }

        match self
            .lines
            .iter_mut()
            .find(|line| &line.product_id == product_id)
        {
            Some(line) => {
                line.quantity = quantity;
                self.persist()?;
                Ok(QuantityUpdate::Updated)
            }
            None => Ok(QuantityUpdate::NotInCart),
        }
    }

    /// Remove a line. Removing an absent product is a no-op.
    ///
    /// Returns whether a line was actually removed.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<bool, StorageError> {
        let before = self.lines.len();
        self.lines.retain(|line| &line.product_id != product_id);
        if self.lines.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.lines.clear();
        self.persist()
    }

    /// Replace the whole collection (used when syncing from the server).
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails.
    pub fn replace(&mut self, lines: Vec<CartLine>) -> Result<(), StorageError> {
        self.lines = lines;
        self.persist()
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// All lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Find the line for a product, if any.
    #[must_use]
    pub fn find(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|line| &line.product_id == product_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn persist(&self) -> Result<(), StorageError> {
        storage::save_array(self.storage.as_ref(), keys::CART, &self.lines)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::dec;

    use crate::storage::MemoryStorage;

    use super::*;

    fn product(id: &str, price: Decimal) -> CartProduct {
        CartProduct {
            product_id: ProductId::new(id),
            name: format!("Product {id}"),
            unit_price: price,
            image: None,
            attributes: None,
        }
    }

    fn empty_cart() -> CartStore {
        CartStore::load(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_add_merges_by_product_id() {
        let mut cart = empty_cart();
        cart.add(product("P1", dec!(10)), 2).unwrap();
        cart.add(product("P1", dec!(10)), 3).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.total(), dec!(50));
    }

    #[test]
    fn test_no_duplicate_lines_across_mutations() {
        let mut cart = empty_cart();
        let p1 = ProductId::new("P1");

        cart.add(product("P1", dec!(10)), 1).unwrap();
        cart.add(product("P2", dec!(4)), 2).unwrap();
        cart.update_quantity(&p1, 7).unwrap();
        cart.remove(&p1).unwrap();
        cart.add(product("P1", dec!(10)), 1).unwrap();
        cart.add(product("P1", dec!(10)), 1).unwrap();

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn test_total_tracks_mutations() {
        let mut cart = empty_cart();
        cart.add(product("P1", dec!(25.50)), 1).unwrap();
        cart.add(product("P2", dec!(15.25)), 2).unwrap();
        assert_eq!(cart.total(), dec!(56.00));
        assert_eq!(cart.total_items(), 3);

        cart.update_quantity(&ProductId::new("P2"), 1).unwrap();
        assert_eq!(cart.total(), dec!(40.75));

        cart.remove(&ProductId::new("P1")).unwrap();
        assert_eq!(cart.total(), dec!(15.25));

        cart.clear().unwrap();
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_update_to_zero_requires_confirmation() {
        let mut cart = empty_cart();
        cart.add(product("P1", dec!(10)), 2).unwrap();

        let outcome = cart.update_quantity(&ProductId::new("P1"), 0).unwrap();
        assert_eq!(outcome, QuantityUpdate::RemovalRequired);
        // The line is still there, untouched.
        assert_eq!(cart.find(&ProductId::new("P1")).unwrap().quantity, 2);

        assert!(cart.remove(&ProductId::new("P1")).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_product() {
        let mut cart = empty_cart();
        let outcome = cart.update_quantity(&ProductId::new("P9"), 3).unwrap();
        assert_eq!(outcome, QuantityUpdate::NotInCart);
    }

    #[test]
    fn test_remove_from_empty_cart_is_noop() {
        let mut cart = empty_cart();
        assert!(!cart.remove(&ProductId::new("P1")).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_persist_and_reload_identity() {
        let dir = tempfile::tempdir().unwrap();

        let mut cart = CartStore::load(Box::new(crate::storage::FileStorage::new(dir.path())));
        cart.add(product("P1", dec!(10)), 2).unwrap();
        cart.add(product("P2", dec!(4.25)), 1).unwrap();
        let saved = cart.lines().to_vec();
        drop(cart);

        let reloaded = CartStore::load(Box::new(crate::storage::FileStorage::new(dir.path())));
        assert_eq!(reloaded.lines(), saved.as_slice());
        assert_eq!(reloaded.total(), dec!(24.25));
    }

    #[test]
    fn test_corrupted_persisted_cart_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set(keys::CART, "{\"oops\": true}").unwrap();

        let cart = CartStore::load(Box::new(storage));
        assert!(cart.is_empty());
    }
}
