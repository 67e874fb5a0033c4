//! Key-value storage for the record store and the session marker.
//!
//! Two implementations:
//! - `MemoryStorage`: in-memory map, used by tests and short-lived tools
//! - `FileStorage`: a JSON document on disk, used by the CLI

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Storage key holding the serialized record store.
pub const USERS_KEY: &str = "users";

/// Storage key holding the serialized session marker.
pub const SESSION_KEY: &str = "loggedInUser";

/// Errors raised by storage backends and by (de)serializing stored values.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt stored value: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    Lock,
}

/// String key-value capability: get, set and remove by key.
///
/// Values are opaque strings; callers own their serialization.
pub trait Storage: Send + Sync {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
