use std::fmt;

/// Error from one of the NHTSA APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NhtsaError {
    /// Connection, timeout or client construction failure.
    Network(String),
    /// The API answered with a non-success status.
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body (may be empty).
        body: String,
    },
    /// The response body was not the expected JSON.
    Parse(String),
    /// A configured base URL is unusable.
    Config(String),
}

impl fmt::Display for NhtsaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "NHTSA network error: {e}"),
            Self::Http { status, body } => write!(f, "NHTSA API error: HTTP {status}: {body}"),
            Self::Parse(e) => write!(f, "NHTSA parse error: {e}"),
            Self::Config(e) => write!(f, "NHTSA config error: {e}"),
        }
    }
}

impl std::error::Error for NhtsaError {}
