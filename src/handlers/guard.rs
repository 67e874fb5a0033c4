use crate::{
    session::{Session, User},
    storage::{Storage, StorageError},
    view::{Region, Tone, View},
};
use tracing::{debug, instrument};

pub const LOGIN_PROMPT: &str = "Please login to predict plant disease";

/// Whether the protected predict container is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    Authenticated(User),
    Anonymous,
}

impl Guard {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Render the welcome box and toggle the protected container.
///
/// # Errors
/// Returns an error if the storage backend fails.
#[instrument(skip_all)]
pub fn guard<S: Storage>(
    session: &Session<S>,
    view: &mut impl View,
) -> Result<Guard, StorageError> {
    match session.current()? {
        Some(user) => {
            debug!("authenticated as {}", user.email);

            view.set_protected_visible(true);
            view.message(Region::Welcome, &format!("Welcome, {}", user.name), Tone::Info);

            Ok(Guard::Authenticated(user))
        }
        None => {
            view.set_protected_visible(false);
            view.message(Region::Welcome, LOGIN_PROMPT, Tone::Info);

            Ok(Guard::Anonymous)
        }
    }
}
