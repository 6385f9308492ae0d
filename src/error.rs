use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// There is no interactive surface to present a dialog on (headless run).
    #[error("Cannot present input dialog: {reason}.")]
    PresentationUnavailable { reason: String },

    #[error("Dialog interaction failed. Original error: {0}")]
    DialogError(#[from] dialoguer::Error),

    #[error("Failed to parse input request on line {line}. Original error: {e}")]
    RequestParseError { line: usize, e: serde_json::Error },

    /// The result slot of an input request may only be written once.
    #[error("Input request '{prompt}' has already been answered.")]
    InputAlreadySet { prompt: String },

    /// A canned choice response points past the end of the choice list.
    #[error("Choice response {index} for '{label}' is out of range for {len} choices.")]
    ChoiceOutOfRange { label: String, index: usize, len: usize },

    #[error("Scripted surface error: {0}.")]
    ScriptError(String),
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
