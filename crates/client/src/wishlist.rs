//! The wishlist store.
//!
//! Same persistence contract as the cart, but with set semantics: entries
//! are keyed by product id, carry no quantity, and adding a product that is
//! already saved is a surfaced no-op rather than a silent one.

use harbor_core::{ProductId, WishlistEntry};

use crate::storage::{self, Storage, StorageError, keys};

/// Result of adding a wishlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistAdd {
    /// The entry was saved.
    Added,
    /// The product was already wishlisted; the collection is unchanged.
    AlreadyPresent,
}

/// Persistent saved-for-later set.
pub struct WishlistStore {
    entries: Vec<WishlistEntry>,
    storage: Box<dyn Storage>,
}

impl WishlistStore {
    /// Load the wishlist from storage.
    ///
    /// Malformed persisted content is discarded and the wishlist starts
    /// empty.
    #[must_use]
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let entries = storage::load_array(storage.as_ref(), keys::WISHLIST);
        Self { entries, storage }
    }

    /// Save a product for later.
    ///
    /// Adding an already-present product id leaves the collection unchanged
    /// and reports [`WishlistAdd::AlreadyPresent`] so the caller can tell
    /// the user.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the wishlist fails.
    pub fn add(&mut self, entry: WishlistEntry) -> Result<WishlistAdd, StorageError> {
        if self.is_wishlisted(&entry.product_id) {
            return Ok(WishlistAdd::AlreadyPresent);
        }
        self.entries.push(entry);
        self.persist()?;
        Ok(WishlistAdd::Added)
    }

    /// Remove an entry. Removing an absent product is a no-op.
    ///
    /// Returns whether an entry was actually removed.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the wishlist fails.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<bool, StorageError> {
        let before = self.entries.len();
        self.entries
            .retain(|entry| &entry.product_id != product_id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Empty the wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the wishlist fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        self.persist()
    }

    /// Replace the whole collection (used when syncing from the server).
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the wishlist fails.
    pub fn replace(&mut self, entries: Vec<WishlistEntry>) -> Result<(), StorageError> {
        self.entries = entries;
        self.persist()
    }

    /// Membership test by product id.
    #[must_use]
    pub fn is_wishlisted(&self, product_id: &ProductId) -> bool {
        self.entries
            .iter()
            .any(|entry| &entry.product_id == product_id)
    }

    /// Number of saved entries.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.entries.len()
    }

    /// All entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<(), StorageError> {
        storage::save_array(self.storage.as_ref(), keys::WISHLIST, &self.entries)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::dec;

    use crate::storage::{FileStorage, MemoryStorage, Storage};

    use super::*;

    fn entry(id: &str) -> WishlistEntry {
        WishlistEntry {
            product_id: ProductId::new(id),
            name: format!("Product {id}"),
            price: dec!(19.99),
            image: None,
            category: Some("Electronics".to_owned()),
        }
    }

    #[test]
    fn test_duplicate_add_is_surfaced_noop() {
        let mut wishlist = WishlistStore::load(Box::new(MemoryStorage::new()));

        assert_eq!(wishlist.add(entry("P1")).unwrap(), WishlistAdd::Added);
        let before = wishlist.entries().to_vec();

        assert_eq!(
            wishlist.add(entry("P1")).unwrap(),
            WishlistAdd::AlreadyPresent
        );
        assert_eq!(wishlist.entries(), before.as_slice());
        assert_eq!(wishlist.total_items(), 1);
    }

    #[test]
    fn test_membership_and_removal() {
        let mut wishlist = WishlistStore::load(Box::new(MemoryStorage::new()));
        wishlist.add(entry("P1")).unwrap();
        wishlist.add(entry("P2")).unwrap();

        assert!(wishlist.is_wishlisted(&ProductId::new("P1")));
        assert!(!wishlist.is_wishlisted(&ProductId::new("P3")));

        assert!(wishlist.remove(&ProductId::new("P1")).unwrap());
        assert!(!wishlist.is_wishlisted(&ProductId::new("P1")));
        assert!(!wishlist.remove(&ProductId::new("P1")).unwrap());
    }

    #[test]
    fn test_persist_and_reload_identity() {
        let dir = tempfile::tempdir().unwrap();

        let mut wishlist = WishlistStore::load(Box::new(FileStorage::new(dir.path())));
        wishlist.add(entry("P1")).unwrap();
        wishlist.add(entry("P2")).unwrap();
        let saved = wishlist.entries().to_vec();
        drop(wishlist);

        let reloaded = WishlistStore::load(Box::new(FileStorage::new(dir.path())));
        assert_eq!(reloaded.entries(), saved.as_slice());
    }

    #[test]
    fn test_corrupted_persisted_wishlist_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set(keys::WISHLIST, "\"not an array\"").unwrap();

        let wishlist = WishlistStore::load(Box::new(storage));
        assert!(wishlist.is_empty());
    }
}
