//! Error types for the upload server

use std::fmt;
use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::insert::errors::InsertError;

/// Errors that stop the server from starting or running
#[derive(Debug)]
pub enum ServerError {
    /// Invalid server configuration
    Config(String),
    /// The listening address could not be resolved
    Resolve { host: String, source: io::Error },
    /// Certificate or key could not be loaded
    Tls {
        cert_path: String,
        key_path: String,
        source: io::Error,
    },
    /// Listener failure
    Io(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            ServerError::Resolve { host, source } => write!(f, "Cannot resolve {}: {}", host, source),
            ServerError::Tls { cert_path, key_path, source } => {
                write!(f, "Cannot load TLS material ({}, {}): {}", cert_path, key_path, source)
            }
            ServerError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::Io(error)
    }
}

/// Errors answered with a 500 response by the upload handler
#[derive(Debug)]
pub enum UploadError {
    /// The request is not a multipart submission
    NotMultipart(String),
    /// The multipart body could not be read
    ReadBody(String),
    /// No part carried a file
    NoFile,
    /// The uploaded document could not be transformed
    Insert(InsertError),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::NotMultipart(msg) => write!(f, "{}", msg),
            UploadError::ReadBody(msg) => write!(f, "reading body: {}", msg),
            UploadError::NoFile => write!(f, "no file in upload"),
            // The cause is logged, not sent to the client
            UploadError::Insert(_) => write!(f, "error inserting gmaps def"),
        }
    }
}

impl std::error::Error for UploadError {}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
