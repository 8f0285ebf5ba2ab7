//! API Error Types

use thiserror::Error;

/// Errors returned by the guestbook REST calls
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request never produced a response (network down, CORS, cold start)
    #[error("Request error: {0}")]
    Request(#[source] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned {status} for {url}")]
    Status {
        status: u16,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
                source: err,
            },
            None if err.is_decode() => ApiError::Decode(err),
            None => ApiError::Request(err),
        }
    }
}
