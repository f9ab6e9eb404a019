//! Error types for bizcard.
//!
//! The card itself has no failure modes; errors only come from the shell
//! around it: terminal I/O, command-line parsing and log setup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BizcardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Invalid value for {flag}: {message}")]
    InvalidArgument { flag: String, message: String },

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Render failed: {0}")]
    Render(String),
}

impl BizcardError {
    pub fn invalid_argument(flag: impl Into<String>, message: impl Into<String>) -> Self {
        BizcardError::InvalidArgument {
            flag: flag.into(),
            message: message.into(),
        }
    }

    /// Whether the error came from how the program was invoked.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            BizcardError::UnknownArgument(_) | BizcardError::InvalidArgument { .. }
        )
    }
}

pub type BizcardResult<T> = Result<T, BizcardError>;
