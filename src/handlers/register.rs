use crate::{
    error::{Error, Failure},
    handlers::{reject, SignupForm},
    session::{Session, User},
    storage::Storage,
    view::{Page, Redirect, Region, Tone, View, SIGNUP_REDIRECT_DELAY},
};
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

pub const SIGNUP_SUCCESS: &str = "Account created successfully! Redirecting to login...";

/// Create an account and schedule the redirect to the login page.
///
/// # Errors
/// [`Failure::MissingField`] if a field is blank, [`Failure::DuplicateAccount`]
/// if the email is taken, or a storage error.
#[instrument(skip(session, view, form), fields(email = %form.email.trim()))]
pub fn register<S: Storage>(
    session: &Session<S>,
    view: &mut impl View,
    form: &SignupForm,
) -> Result<User, Error> {
    let name = form.name.trim();
    let email = form.email.trim();
    let password = form.password.expose_secret();

    if name.is_empty() || email.is_empty() || password.trim().is_empty() {
        return Err(reject(view, Region::Signup, Failure::MissingField));
    }

    let mut accounts = session.accounts()?;

    if accounts.contains(email) {
        debug!("email already registered");

        return Err(reject(view, Region::Signup, Failure::DuplicateAccount));
    }

    let user = User {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    accounts.insert(user.clone());
    session.save_accounts(&accounts)?;

    view.message(Region::Signup, SIGNUP_SUCCESS, Tone::Success);
    view.navigate(Redirect::after(Page::Login, SIGNUP_REDIRECT_DELAY));

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{storage::MemoryStorage, view::RecordingView};

    #[test]
    fn test_register_trims_name_and_email() {
        let session = Session::new(MemoryStorage::new());
        let mut view = RecordingView::new();

        let user = register(
            &session,
            &mut view,
            &SignupForm::new("  Ana ", " ana@example.com ", " pw "),
        )
        .expect("register");

        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@example.com");
        // password kept verbatim
        assert_eq!(user.password, " pw ");
        assert!(session
            .accounts()
            .map(|a| a.contains("ana@example.com"))
            .unwrap_or(false));
        assert_eq!(
            view.last_message(Region::Signup),
            Some((SIGNUP_SUCCESS, Tone::Success))
        );
        assert_eq!(
            view.redirects,
            vec![Redirect::after(Page::Login, SIGNUP_REDIRECT_DELAY)]
        );
    }

    #[test]
    fn test_register_blank_fields() {
        let forms = [
            SignupForm::new("", "a@example.com", "pw"),
            SignupForm::new("Ana", "   ", "pw"),
            SignupForm::new("Ana", "a@example.com", ""),
            SignupForm::new("Ana", "a@example.com", "   "),
        ];

        for form in forms {
            let session = Session::new(MemoryStorage::new());
            let mut view = RecordingView::new();

            let err = register(&session, &mut view, &form).expect_err("blank field");
            assert_eq!(err.failure(), Some(Failure::MissingField));
            assert_eq!(
                view.last_message(Region::Signup),
                Some(("All fields are required!", Tone::Error))
            );
            assert!(view.redirects.is_empty());
            assert!(session.storage().is_empty());
        }
    }
}
