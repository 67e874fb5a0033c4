pub mod account;
pub mod logging;
pub mod predict;
pub mod serve;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};
use std::path::PathBuf;

pub const ARG_STORE: &str = "store";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("leafdoc")
        .about("Leaf disease diagnosis client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_STORE)
                .short('s')
                .long("store")
                .help("Path of the account and session store (default: platform data directory)")
                .env("LEAFDOC_STORE")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .subcommand(account::signup())
        .subcommand(account::login())
        .subcommand(account::logout())
        .subcommand(account::status())
        .subcommand(predict::command())
        .subcommand(serve::command());

    logging::with_args(command)
}
