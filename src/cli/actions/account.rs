use crate::{
    cli::{globals::GlobalArgs, terminal::TerminalView},
    error::Error,
    handlers::{self, LoginForm, SignupForm},
};
use anyhow::{Context, Result};
use std::process::ExitCode;

fn exit_code<T>(outcome: Result<T, Error>, store: &GlobalArgs) -> Result<ExitCode> {
    match outcome {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(Error::Rejected(_)) => Ok(ExitCode::FAILURE),
        Err(Error::Storage(e)) => Err(e).with_context(|| {
            format!("Failed to access store: {}", store.store_path.display())
        }),
    }
}

/// # Errors
/// Returns an error if the store cannot be read or written.
pub async fn signup(globals: &GlobalArgs, form: &SignupForm) -> Result<ExitCode> {
    let session = globals.session();
    let mut view = TerminalView::new();

    let outcome = handlers::register(&session, &mut view, form);
    view.follow_redirect().await;

    exit_code(outcome, globals)
}

/// # Errors
/// Returns an error if the store cannot be read or written.
pub async fn login(globals: &GlobalArgs, form: &LoginForm) -> Result<ExitCode> {
    let session = globals.session();
    let mut view = TerminalView::new();

    let outcome = handlers::login(&session, &mut view, form);
    if let Ok(user) = &outcome {
        // the predict page greets the user on arrival
        println!("Logged in as {}", user.email);
    }
    view.follow_redirect().await;

    exit_code(outcome, globals)
}

/// # Errors
/// Returns an error if the store cannot be written.
pub async fn logout(globals: &GlobalArgs) -> Result<ExitCode> {
    let session = globals.session();
    let mut view = TerminalView::new();

    handlers::logout(&session, &mut view).with_context(|| {
        format!("Failed to access store: {}", globals.store_path.display())
    })?;
    println!("Logged out");
    view.follow_redirect().await;

    Ok(ExitCode::SUCCESS)
}

/// # Errors
/// Returns an error if the store cannot be read.
pub fn status(globals: &GlobalArgs) -> Result<ExitCode> {
    let session = globals.session();
    let mut view = TerminalView::new();

    handlers::guard(&session, &mut view).with_context(|| {
        format!("Failed to access store: {}", globals.store_path.display())
    })?;

    Ok(ExitCode::SUCCESS)
}
