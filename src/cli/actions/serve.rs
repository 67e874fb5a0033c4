use crate::api::{self, FixedLabel};
use anyhow::Result;
use std::{process::ExitCode, sync::Arc};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub label: String,
    /// 0.0 to 1.0
    pub confidence: f64,
}

/// Execute the serve action.
/// # Errors
/// Returns an error if the server fails to start.
pub async fn execute(args: Args) -> Result<ExitCode> {
    info!(
        label = %args.label,
        confidence = args.confidence,
        "serving fixed-label predictions"
    );

    let classifier = Arc::new(FixedLabel::new(args.label, args.confidence));

    api::new(args.port, classifier).await?;

    Ok(ExitCode::SUCCESS)
}
