use anyhow::Result;
use leafdoc::cli::{self, telemetry};
use std::process::ExitCode;

// Main function
#[tokio::main]
async fn main() -> Result<ExitCode> {
    let action = cli::start()?;

    let code = action.execute().await;

    telemetry::shutdown_tracer();

    code
}
