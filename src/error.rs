use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for RustF text helpers
#[derive(Error, Debug)]
pub enum Error {
    #[error("Index out of range: {start}..{end} for text of length {len}")]
    IndexOutOfRange { start: usize, end: usize, len: usize },

    #[error("Invalid chunk size: {0} (must be greater than zero)")]
    InvalidChunkSize(usize),

    #[error("Invalid case mode: {0}")]
    InvalidCaseMode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_case_mode(name: impl Into<String>) -> Self {
        Self::InvalidCaseMode(name.into())
    }

    /// Whether the error was caused by caller-supplied arguments rather than the environment
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Error::IndexOutOfRange { .. } | Error::InvalidChunkSize(_) | Error::InvalidCaseMode(_)
        )
    }
}
