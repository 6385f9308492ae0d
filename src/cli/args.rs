use crate::constants::{verbosity, DEFAULT_TITLE};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for build-prompt.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Prompt text. Empty or omitted pauses until Return is pressed.
    #[arg(short, long, default_value = "")]
    pub prompt: String,

    /// Value the dialog starts with.
    #[arg(short, long = "default", default_value = "")]
    pub default_value: String,

    /// Fixed choices (comma-separated). Without a value the choice list is empty.
    #[arg(short, long, value_delimiter = ',', num_args = 0..=1)]
    pub choices: Option<Vec<String>>,

    /// Newline-delimited JSON requests from a file, or `-` to read from stdin.
    ///
    /// Each line is an object such as
    /// `{"prompt": "Pick one", "default": "two", "choices": ["one", "two"]}`.
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["prompt", "default_value", "choices"])]
    pub requests: Option<PathBuf>,

    /// Dialog title.
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Answer every dialog with its pre-filled value instead of asking.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
