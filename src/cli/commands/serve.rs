use anyhow::{bail, Result};
use clap::{Arg, ArgMatches, Command};

pub const ARG_PORT: &str = "port";
pub const ARG_LABEL: &str = "label";
pub const ARG_CONFIDENCE: &str = "confidence";

#[must_use]
pub fn command() -> Command {
    Command::new("serve")
        .about("Run a development prediction server")
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("5000")
                .env("LEAFDOC_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_LABEL)
                .long("label")
                .help("Class label returned for every image, e.g. Tomato___Leaf_Mold")
                .env("LEAFDOC_LABEL")
                .default_value("Tomato___healthy"),
        )
        .arg(
            Arg::new(ARG_CONFIDENCE)
                .long("confidence")
                .help("Confidence percentage returned for every image")
                .env("LEAFDOC_CONFIDENCE")
                .default_value("100")
                .value_parser(clap::value_parser!(f64)),
        )
}

#[derive(Debug)]
pub struct Options {
    pub port: u16,
    pub label: String,
    /// 0.0 to 1.0
    pub confidence: f64,
}

impl Options {
    /// # Errors
    /// Returns an error if the confidence is outside 0 to 100.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let percent = matches.get_one::<f64>(ARG_CONFIDENCE).copied().unwrap_or(100.0);
        if !(0.0..=100.0).contains(&percent) {
            bail!("--{ARG_CONFIDENCE} must be between 0 and 100, got {percent}");
        }

        Ok(Self {
            port: matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(5000),
            label: matches
                .get_one::<String>(ARG_LABEL)
                .cloned()
                .unwrap_or_default(),
            confidence: percent / 100.0,
        })
    }
}
