/// Handles argument parsing and request dispatch.
pub mod cli;

/// Shared constants.
pub mod constants;

/// Modal prompt dialogs and the surfaces they are presented on.
pub mod dialog;

/// Defines custom error types.
pub mod error;

/// Bridges build-engine input requests to prompt dialogs.
pub mod handler;

/// Input requests and their JSON line reader.
pub mod request;

pub use dialog::PromptDialog;
pub use handler::{DialogInputHandler, InputHandler};
pub use request::InputRequest;
