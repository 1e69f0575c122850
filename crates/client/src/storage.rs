//! Local persistent key/value storage.
//!
//! The client persists small JSON documents under well-known keys: the cart
//! and wishlist collections and the bearer credential. [`FileStorage`] keeps
//! one file per key under the configured data directory; [`MemoryStorage`]
//! backs tests and ephemeral sessions.
//!
//! Reads are forgiving: a missing or unreadable key is simply absent, and
//! [`load_array`] discards malformed or non-array payloads, resetting the
//! collection to empty. Only writes surface errors.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Well-known storage keys.
pub mod keys {
    /// Serialized cart lines (JSON array).
    pub const CART: &str = "cart";
    /// Serialized wishlist entries (JSON array).
    pub const WISHLIST: &str = "wishlist";
    /// Bearer credential issued at login.
    pub const AUTH_TOKEN: &str = "jwtToken";
    /// Profile of the logged-in user.
    pub const USER: &str = "user";
}

/// Errors that can occur when persisting state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Writing to the backing store failed.
    #[error("Storage write error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a collection failed.
    #[error("Storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A persistent string key/value store.
pub trait Storage: Send + Sync {
    /// Get the stored value, or `None` if the key is absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value under a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal fails for a present key.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// FileStorage
// =============================================================================

/// File-backed storage: one `<key>.json` file per key under a directory.
///
/// The directory is created on first write.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at `dir`. No I/O happens until first use.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// MemoryStorage
// =============================================================================

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
        Ok(())
    }
}

// =============================================================================
// Collection Helpers
// =============================================================================

/// Load a JSON array from storage.
///
/// Missing keys and malformed content (including non-array payloads) load
/// as an empty collection; corruption is logged and discarded, never fatal.
pub fn load_array<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Vec<T> {
    let Some(raw) = storage.get(key) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding malformed persisted collection");
            Vec::new()
        }
    }
}

/// Persist a collection as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_array<T: Serialize>(
    storage: &dyn Storage,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(items)?;
    storage.set(key, &raw)
}
