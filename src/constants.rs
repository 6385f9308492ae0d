//! Constants used throughout build-prompt

/// Label shown in place of an empty prompt
pub const PAUSE_MESSAGE: &str = "Press Return key to continue...";

/// Default dialog title
pub const DEFAULT_TITLE: &str = "Build Input";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Button captions
pub mod buttons {
    pub const OK: &str = "OK";
    pub const CANCEL: &str = "Cancel";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
