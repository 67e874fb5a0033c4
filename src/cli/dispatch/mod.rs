//! Map parsed CLI arguments to an [`Action`].

use crate::cli::{
    actions::{predict, serve, Action},
    commands::{self, account},
    globals::{default_store_path, GlobalArgs},
};
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

fn globals(matches: &clap::ArgMatches) -> Result<GlobalArgs> {
    let store_path = matches
        .get_one::<PathBuf>(commands::ARG_STORE)
        .cloned()
        .or_else(default_store_path)
        .context("could not determine a data directory, pass --store")?;

    Ok(GlobalArgs::new(store_path))
}

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("signup", sub)) => Ok(Action::Signup {
            globals: globals(matches)?,
            form: account::signup_form(sub)?,
        }),
        Some(("login", sub)) => Ok(Action::Login {
            globals: globals(matches)?,
            form: account::login_form(sub)?,
        }),
        Some(("logout", _)) => Ok(Action::Logout {
            globals: globals(matches)?,
        }),
        Some(("status", _)) => Ok(Action::Status {
            globals: globals(matches)?,
        }),
        Some(("predict", sub)) => {
            let options = commands::predict::Options::parse(sub)?;
            Ok(Action::Predict {
                globals: globals(matches)?,
                args: predict::Args {
                    image: options.image,
                    endpoint: options.endpoint,
                    timeout: options.timeout,
                },
            })
        }
        Some(("serve", sub)) => {
            let options = commands::serve::Options::parse(sub)?;
            Ok(Action::Serve(serve::Args {
                port: options.port,
                label: options.label,
                confidence: options.confidence,
            }))
        }
        Some((name, _)) => Err(anyhow!("unknown command: {name}")),
        None => Err(anyhow!("missing command")),
    }
}
