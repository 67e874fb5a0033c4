use thiserror::Error;

use crate::storage::StorageError;

/// User-facing failures. The `Display` text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("All fields are required!")]
    MissingField,
    #[error("Email already registered!")]
    DuplicateAccount,
    #[error("Invalid email or password!")]
    InvalidCredentials,
    #[error("Please select an image")]
    NoFileSelected,
    #[error("Prediction failed. Check backend.")]
    PredictionFailed,
}

/// Result of an account handler: either the user was shown a failure, or the
/// backing storage broke underneath the handler.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Rejected(#[from] Failure),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl Error {
    /// The user-facing failure, if this error is one.
    #[must_use]
    pub const fn failure(&self) -> Option<Failure> {
        match self {
            Self::Rejected(failure) => Some(*failure),
            Self::Storage(_) => None,
        }
    }
}
