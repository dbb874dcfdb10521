use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// A user-supplied file could not be parsed as JSON.
    #[error("{0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Lookup(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote error: {0}")]
    Remote(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;
