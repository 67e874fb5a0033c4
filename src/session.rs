//! Account records and the session context handed to every handler.
//!
//! The record store is one JSON object (email to record) under
//! [`USERS_KEY`]; the session marker is a JSON copy of the logged-in record
//! under [`SESSION_KEY`]. Neither is ever patched in place.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::storage::{Storage, StorageError, SESSION_KEY, USERS_KEY};

/// A registered account. The password is kept exactly as entered.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// All accounts, keyed by email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Accounts(BTreeMap<String, User>);

impl Accounts {
    #[must_use]
    pub fn get(&self, email: &str) -> Option<&User> {
        self.0.get(email)
    }

    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.0.contains_key(email)
    }

    /// Insert a record under its email, replacing any previous one.
    pub fn insert(&mut self, user: User) {
        self.0.insert(user.email.clone(), user);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Explicit session context: the record store and session marker over an
/// injected [`Storage`] backend.
#[derive(Debug)]
pub struct Session<S> {
    storage: S,
}

impl<S: Storage> Session<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the record store. A missing key is an empty store.
    ///
    /// # Errors
    /// Returns an error if the backend fails or the stored JSON is corrupt.
    pub fn accounts(&self) -> Result<Accounts, StorageError> {
        match self.storage.get(USERS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Accounts::default()),
        }
    }

    /// Rewrite the whole record store.
    ///
    /// # Errors
    /// Returns an error if the backend fails.
    pub fn save_accounts(&self, accounts: &Accounts) -> Result<(), StorageError> {
        let raw = serde_json::to_string(accounts)?;
        self.storage.set(USERS_KEY, &raw)
    }

    /// The logged-in user, if any.
    ///
    /// An unreadable marker counts as no session.
    ///
    /// # Errors
    /// Returns an error if the backend fails.
    pub fn current(&self) -> Result<Option<User>, StorageError> {
        let Some(raw) = self.storage.get(SESSION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("Ignoring unreadable session marker: {}", e);
                Ok(None)
            }
        }
    }

    /// Write `user` as the session marker.
    ///
    /// # Errors
    /// Returns an error if the backend fails.
    pub fn begin(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user)?;
        self.storage.set(SESSION_KEY, &raw)?;

        debug!("session started for {}", user.email);

        Ok(())
    }

    /// Remove the session marker. Safe to call without a session.
    ///
    /// # Errors
    /// Returns an error if the backend fails.
    pub fn end(&self) -> Result<(), StorageError> {
        self.storage.remove(SESSION_KEY)
    }
}
