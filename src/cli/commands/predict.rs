use crate::client::DEFAULT_ENDPOINT;
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::{path::PathBuf, time::Duration};
use url::Url;

pub const ARG_IMAGE: &str = "image";
pub const ARG_ENDPOINT: &str = "endpoint";
pub const ARG_TIMEOUT_SECONDS: &str = "timeout-seconds";

#[must_use]
pub fn command() -> Command {
    Command::new("predict")
        .about("Upload a leaf image and show the diagnosis")
        .arg(
            Arg::new(ARG_IMAGE)
                .help("Leaf image to analyze")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_ENDPOINT)
                .long("endpoint")
                .help("Prediction endpoint URL")
                .env("LEAFDOC_ENDPOINT")
                .default_value(DEFAULT_ENDPOINT),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_SECONDS)
                .long("timeout-seconds")
                .help("Give up on the prediction request after this many seconds (default: wait forever)")
                .env("LEAFDOC_TIMEOUT_SECONDS")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
}

#[derive(Debug)]
pub struct Options {
    pub image: Option<PathBuf>,
    pub endpoint: Url,
    pub timeout: Option<Duration>,
}

impl Options {
    /// # Errors
    /// Returns an error if the endpoint is not a valid URL.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let endpoint = matches
            .get_one::<String>(ARG_ENDPOINT)
            .map_or(DEFAULT_ENDPOINT, String::as_str);
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid prediction endpoint: {endpoint}"))?;

        Ok(Self {
            image: matches.get_one::<PathBuf>(ARG_IMAGE).cloned(),
            endpoint,
            timeout: matches
                .get_one::<u64>(ARG_TIMEOUT_SECONDS)
                .copied()
                .map(Duration::from_secs),
        })
    }
}
