use crate::{
    cli::{globals::GlobalArgs, terminal::TerminalView},
    client::{PredictClient, Upload},
    handlers,
};
use anyhow::{Context, Result};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing::debug;
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub image: Option<PathBuf>,
    pub endpoint: Url,
    pub timeout: Option<Duration>,
}

/// Run the page guard, then the prediction if the predict page is open.
///
/// # Errors
/// Returns an error if the store or the image file cannot be read.
pub async fn execute(globals: &GlobalArgs, args: Args) -> Result<ExitCode> {
    let session = globals.session();
    let mut view = TerminalView::new();

    let state = handlers::guard(&session, &mut view).with_context(|| {
        format!("Failed to access store: {}", globals.store_path.display())
    })?;

    if !state.is_authenticated() {
        debug!("predict page is hidden, not predicting");
        return Ok(ExitCode::FAILURE);
    }

    let selection = match &args.image {
        Some(path) => Some(
            Upload::from_path(path)
                .await
                .with_context(|| format!("Failed to read image: {}", path.display()))?,
        ),
        None => None,
    };

    let client = PredictClient::new(args.endpoint, args.timeout)
        .context("Failed to build HTTP client")?;

    match handlers::predict(&client, &mut view, selection).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
