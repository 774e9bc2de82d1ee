use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OneLinerError {
    #[error("Alias not found: {0}")]
    NotFound(String),

    #[error("Alias already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid alias name '{0}': only letters, digits, '-' and '_' are allowed")]
    InvalidName(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("No alias file at {}; run `one-liner init` first", .0.display())]
    Uninitialized(PathBuf),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, OneLinerError>;
