//! Error types for user-facing failures.

use thiserror::Error;

/// Errors surfaced to the user of the command line tool.
///
/// An empty range is not an error; it yields an empty block list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    /// Input could not be read as an IPv4 address.
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    /// Required arguments missing or unusable. Holds the rendered usage text.
    #[error("{0}")]
    Usage(String),
}

impl RangeError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            RangeError::InvalidAddress(_) => 1,
            RangeError::Usage(_) => 2,
        }
    }
}

impl From<clap::Error> for RangeError {
    fn from(e: clap::Error) -> Self {
        RangeError::Usage(e.to_string())
    }
}
