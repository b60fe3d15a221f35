//! Error types for the todo client.
//!
//! # Design
//! A closed enum so callers branch on kind with `matches!` instead of string
//! matching. `Connection` means the request never completed an HTTP exchange
//! at all, which keeps it distinct from every application-level failure.
//! `NotFound` covers both a 404 and the service's "200 with zero results"
//! convention. Each variant carries the detail a caller needs to render a
//! message (body text, cause, offending argument).

use std::fmt;
use std::io;

/// Errors returned by the client, actions, and formatter.
#[derive(Debug)]
pub enum ClientError {
    /// The request could not be sent or received (DNS, refused, timeout).
    Connection(String),

    /// The server returned 404, or 200 with an empty result set.
    NotFound(String),

    /// The server returned a non-success status other than 404.
    InvalidResponse { status: u16, body: String },

    /// A CLI-supplied item ID was not a positive integer. Detected before
    /// any network call.
    NotANumber(String),

    /// The response body could not be decoded as the expected JSON shape.
    Decode(String),

    /// A request payload or output value could not be encoded.
    Encode(String),

    /// Writing to the output sink failed.
    Io(io::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Connection(cause) => write!(f, "connection error: {cause}"),
            ClientError::NotFound(detail) => write!(f, "not found: {detail}"),
            ClientError::InvalidResponse { status, body } => {
                write!(f, "invalid response: HTTP {status}: {body}")
            }
            ClientError::NotANumber(arg) => {
                write!(f, "item ID must be a number: {arg:?}")
            }
            ClientError::Decode(msg) => write!(f, "failed to decode response: {msg}"),
            ClientError::Encode(msg) => write!(f, "failed to encode: {msg}"),
            ClientError::Io(err) => write!(f, "output error: {err}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> Self {
        ClientError::Io(err)
    }
}
