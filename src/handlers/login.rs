use crate::{
    error::{Error, Failure},
    handlers::{reject, LoginForm},
    session::{Session, User},
    storage::Storage,
    view::{Page, Redirect, Region, View},
};
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

/// Check credentials, start the session and go to the predict page.
///
/// # Errors
/// [`Failure::InvalidCredentials`] on unknown email or wrong password, or a
/// storage error.
#[instrument(skip(session, view, form), fields(email = %form.email.trim()))]
pub fn login<S: Storage>(
    session: &Session<S>,
    view: &mut impl View,
    form: &LoginForm,
) -> Result<User, Error> {
    let email = form.email.trim();
    let accounts = session.accounts()?;

    let user = match accounts.get(email) {
        Some(user) if user.password == form.password.expose_secret() => user.clone(),
        Some(_) => {
            debug!("password mismatch");

            return Err(reject(view, Region::Login, Failure::InvalidCredentials));
        }
        None => {
            debug!("user not found");

            return Err(reject(view, Region::Login, Failure::InvalidCredentials));
        }
    };

    session.begin(&user)?;

    view.navigate(Redirect::now(Page::Predict));

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handlers::{register, SignupForm},
        storage::MemoryStorage,
        view::{RecordingView, Tone},
    };

    fn registered() -> Session<MemoryStorage> {
        let session = Session::new(MemoryStorage::new());
        let mut view = RecordingView::new();
        register(
            &session,
            &mut view,
            &SignupForm::new("Ana", "ana@example.com", "s3cret"),
        )
        .expect("register");
        session
    }

    #[test]
    fn test_login_success_writes_marker() {
        let session = registered();
        let mut view = RecordingView::new();

        let user = login(
            &session,
            &mut view,
            &LoginForm::new(" ana@example.com ", "s3cret"),
        )
        .expect("login");

        assert_eq!(user.name, "Ana");
        assert_eq!(session.current().ok().flatten(), Some(user));
        assert_eq!(view.redirects, vec![Redirect::now(Page::Predict)]);
        assert!(view.messages.is_empty());
    }

    #[test]
    fn test_login_unknown_email() {
        let session = registered();
        let mut view = RecordingView::new();

        let err = login(&session, &mut view, &LoginForm::new("bob@example.com", "s3cret"))
            .expect_err("unknown email");

        assert_eq!(err.failure(), Some(Failure::InvalidCredentials));
        assert_eq!(
            view.last_message(Region::Login),
            Some(("Invalid email or password!", Tone::Error))
        );
        assert_eq!(session.current().ok().flatten(), None);
    }

    #[test]
    fn test_password_is_not_trimmed() {
        let session = registered();
        let mut view = RecordingView::new();

        let result = login(&session, &mut view, &LoginForm::new("ana@example.com", "s3cret "));
        assert!(result.is_err());
        assert!(view.redirects.is_empty());
    }
}
