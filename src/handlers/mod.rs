//! Handlers behind each user action.
//!
//! Every handler takes the session context and a [`View`](crate::view::View),
//! renders its outcome, and returns it. Failures are shown inline and are
//! never fatal to the caller.

pub mod guard;
pub use self::guard::{guard, Guard};

pub mod login;
pub use self::login::login;

pub mod logout;
pub use self::logout::logout;

pub mod predict;
pub use self::predict::predict;

pub mod register;
pub use self::register::register;

// common types for the handlers
use crate::{
    error::{Error, Failure},
    view::{Region, Tone, View},
};
use secrecy::SecretString;

/// Sign-up form input.
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

impl SignupForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Login form input.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

fn reject(view: &mut impl View, region: Region, failure: Failure) -> Error {
    view.message(region, &failure.to_string(), Tone::Error);
    Error::Rejected(failure)
}
