pub mod account;
pub mod predict;
pub mod serve;

use crate::{
    cli::globals::GlobalArgs,
    handlers::{LoginForm, SignupForm},
};
use anyhow::Result;
use std::process::ExitCode;

#[derive(Debug)]
pub enum Action {
    Signup {
        globals: GlobalArgs,
        form: SignupForm,
    },
    Login {
        globals: GlobalArgs,
        form: LoginForm,
    },
    Logout {
        globals: GlobalArgs,
    },
    Status {
        globals: GlobalArgs,
    },
    Predict {
        globals: GlobalArgs,
        args: predict::Args,
    },
    Serve(serve::Args),
}

impl Action {
    /// Run the action. Failures already shown to the user map to a failing
    /// exit code; infrastructure errors are returned.
    ///
    /// # Errors
    /// Returns an error if storage, configuration, or the server fails.
    pub async fn execute(self) -> Result<ExitCode> {
        match self {
            Self::Signup { globals, form } => account::signup(&globals, &form).await,
            Self::Login { globals, form } => account::login(&globals, &form).await,
            Self::Logout { globals } => account::logout(&globals).await,
            Self::Status { globals } => account::status(&globals),
            Self::Predict { globals, args } => predict::execute(&globals, args).await,
            Self::Serve(args) => serve::execute(args).await,
        }
    }
}
