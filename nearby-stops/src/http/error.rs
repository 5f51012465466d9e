//! Lookup error types.

/// Errors that can occur when querying an upstream API.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Connection, DNS or timeout failure before a response arrived
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// API answered with something other than 200 OK
    #[error("HTTP status {status}")]
    HttpStatus { status: u16 },

    /// Response body was not in the expected format
    #[error("malformed response: {message}")]
    Parse { message: String, body: String },

    /// Response was well formed but lacked the data asked for
    #[error("not found: {0}")]
    NotFound(String),

    /// Request URL could not be built
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}
