//! Error types shared by every code host implementation

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure of a code host operation
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be built or sent, or its body could not be read
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body was not the JSON document we expected
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered with a status other than the expected success code
    #[error("{context} ({status}): {message}")]
    UnexpectedStatus {
        context: String,
        status: StatusCode,
        message: String,
    },

    /// The caller misused the API, e.g. handed over a repository from another host
    #[error("{0}")]
    Usage(String),
}

impl Error {
    /// HTTP status carried by the error, if the server produced one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Http(err) => err.status(),
            _ => None,
        }
    }
}
