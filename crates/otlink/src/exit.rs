use std::fmt;

use otlink_frame::FrameError;
use otlink_link::LinkError;

// Exit codes follow sysexits-style conventions.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::InvalidHex(_) => CliError::new(USAGE, format!("{context}: {err}")),
        FrameError::UnknownDataId(_) | FrameError::UnknownMessageType(_) => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
    }
}

pub fn link_error(context: &str, err: LinkError) -> CliError {
    match err {
        LinkError::Timeout => CliError::new(TIMEOUT, format!("{context}: {err}")),
        LinkError::InvalidResponse => CliError::new(DATA_INVALID, format!("{context}: {err}")),
        LinkError::NotInitialized | LinkError::NotReady(_) => {
            CliError::new(FAILURE, format!("{context}: {err}"))
        }
    }
}
