//! Error types for relnorm

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// relnorm errors
#[derive(Error, Debug)]
pub enum Error {
    /// A dependency token without `"->"` or with an empty side.
    #[error("Malformed dependency: {0:?}")]
    MalformedDependency(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
