//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed transcript input: {0}")]
    MalformedInput(String),

    #[error("Bedrock endpoint error: {0}")]
    Upstream(String),

    #[error("Incomplete extraction: {0}")]
    IncompleteExtraction(String),

    #[error("Storage write error: {0}")]
    StorageWrite(String),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] dotenvy::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, Error>;
