use crate::handlers::{LoginForm, SignupForm};
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long("password")
        .help("Account password")
        .env("LEAFDOC_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("Account email")
        .required(true)
}

#[must_use]
pub fn signup() -> Command {
    Command::new("signup")
        .about("Create a local account")
        .arg(
            Arg::new(ARG_NAME)
                .short('n')
                .long("name")
                .help("Display name")
                .required(true),
        )
        .arg(email_arg())
        .arg(password_arg())
}

#[must_use]
pub fn login() -> Command {
    Command::new("login")
        .about("Log in with email and password")
        .arg(email_arg())
        .arg(password_arg())
}

#[must_use]
pub fn logout() -> Command {
    Command::new("logout").about("End the current session")
}

#[must_use]
pub fn status() -> Command {
    Command::new("status").about("Show who is logged in")
}

fn value(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

/// # Errors
/// Returns an error if a required argument is missing.
pub fn signup_form(matches: &ArgMatches) -> Result<SignupForm> {
    Ok(SignupForm::new(
        value(matches, ARG_NAME)?,
        value(matches, ARG_EMAIL)?,
        value(matches, ARG_PASSWORD)?,
    ))
}

/// # Errors
/// Returns an error if a required argument is missing.
pub fn login_form(matches: &ArgMatches) -> Result<LoginForm> {
    Ok(LoginForm::new(
        value(matches, ARG_EMAIL)?,
        value(matches, ARG_PASSWORD)?,
    ))
}
