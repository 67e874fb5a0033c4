use crate::{
    session::Session,
    storage::{Storage, StorageError},
    view::{Page, Redirect, View},
};
use tracing::instrument;

/// End the session, if any, and go to the login page.
///
/// # Errors
/// Returns an error if the storage backend fails.
#[instrument(skip_all)]
pub fn logout<S: Storage>(session: &Session<S>, view: &mut impl View) -> Result<(), StorageError> {
    session.end()?;

    view.navigate(Redirect::now(Page::Login));

    Ok(())
}
