//! # Storage Layer
//!
//! Persistence for habitz is a plain string key-value store. The habit
//! collection lives as one JSON blob under one key (see
//! [`crate::store::codec`]); this layer knows nothing about habits.
//!
//! ## Implementations
//!
//! - [`memory::MemoryStorage`]: In-memory storage for tests and embedding
//!   - No persistence
//!   - Can simulate write failures
//!
//! - [`fs::FileStorage`]: File-based storage
//!   - One file per key: `{root}/{key}.json`
//!   - Atomic writes (tmp file then rename)
//!
//! ## Storage Layout
//!
//! For `FileStorage`:
//! ```text
//! {data_dir}/
//! ├── habits.json     # The habit collection blob
//! └── config.json     # HabitzConfig (read by crate::config, not this layer)
//! ```

use crate::error::{HabitzError, Result};

pub mod fs;
pub mod memory;

/// Abstract interface for raw string storage.
///
/// All methods take `&self`; implementations that need mutation use interior
/// mutability. Habitz is single-threaded, so nothing here is `Sync`.
pub trait KeyValueStore {
    /// Read the value under `key`. `Ok(None)` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;
}

/// Checks that `key` is non-empty and made only of ASCII letters, digits, `-`
/// and `_`.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(HabitzError::Storage(format!("Invalid storage key: {:?}", key)))
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}
