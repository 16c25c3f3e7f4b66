//! Error types for the engine exchange.

use std::fmt;
use std::io;

/// Failure of the snapshot/decision exchange with the engine.
///
/// Transport failures are fatal: the protocol loop stops at the first one and
/// the process exits with a distinguished status. There is no retry.
#[derive(Debug)]
pub enum TransportError {
    /// The engine hung up (end of stream while waiting for a snapshot).
    Closed,
    /// An I/O error on the underlying stream.
    Io(io::Error),
    /// A line arrived that does not decode as the expected message.
    Decode(serde_json::Error),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Closed => write!(f, "engine closed the connection"),
            TransportError::Io(e) => write!(f, "transport i/o error: {e}"),
            TransportError::Decode(e) => write!(f, "malformed engine message: {e}"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Closed => None,
            TransportError::Io(e) => Some(e),
            TransportError::Decode(e) => Some(e),
        }
    }
}

impl From<io::Error> for TransportError {
    fn from(e: io::Error) -> Self {
        TransportError::Io(e)
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Decode(e)
    }
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
