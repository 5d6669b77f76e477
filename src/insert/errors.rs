//! Error types for map source insertion

use std::fmt;
use std::io;

/// Errors raised while inserting a map source
#[derive(Debug)]
pub enum InsertError {
    /// The input stream failed with something other than end of stream
    IoFailure(io::Error),
    /// A uid attribute could not be turned into an identifier
    MalformedIdentifier(String),
    /// The embedded map source definition is unusable
    InvalidDefinition(String),
    /// A command-line argument is missing or unusable
    InvalidArgument(String),
    /// The input file could not be opened
    OpenFailure {
        path: String,
        source: io::Error,
    },
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::IoFailure(e) => write!(f, "I/O error: {}", e),
            InsertError::MalformedIdentifier(uid) => write!(f, "Malformed map source uid: {}", uid),
            InsertError::InvalidDefinition(msg) => write!(f, "Invalid map source definition: {}", msg),
            InsertError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            InsertError::OpenFailure { path, source } => write!(f, "Cannot open {}: {}", path, source),
        }
    }
}

impl std::error::Error for InsertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InsertError::IoFailure(e) => Some(e),
            InsertError::OpenFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for InsertError {
    fn from(error: io::Error) -> Self {
        InsertError::IoFailure(error)
    }
}

/// Result type for insertion operations
pub type InsertResult<T> = Result<T, InsertError>;
