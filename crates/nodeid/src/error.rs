//! Error types for node identifiers.

use std::fmt;

/// Result type alias for the nodeid crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building a `NodeId`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Input does not describe a valid node identifier.
    #[error("Invalid node id: {0}")]
    InvalidNodeId(InvalidReason),
}

/// Why a candidate was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidReason {
    /// No bytes at all
    Empty,
    /// Byte length outside the allow-list
    Length(usize),
    /// Text was not a hex string
    Hex(hex::FromHexError),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Empty => write!(f, "empty input"),
            InvalidReason::Length(len) => write!(
                f,
                "invalid length {} (expected one of {:?} bytes)",
                len,
                crate::VALID_LENGTHS
            ),
            InvalidReason::Hex(err) => write!(f, "bad hex: {}", err),
        }
    }
}

impl Error {
    /// The reason carried by this error.
    pub fn reason(&self) -> &InvalidReason {
        match self {
            Error::InvalidNodeId(reason) => reason,
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::InvalidNodeId(InvalidReason::Hex(err))
    }
}
