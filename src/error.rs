// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeekerError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed catalog JSON: {source} (path: {path})")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Duplicate resource id in catalog: {0}")]
    DuplicateId(String),

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SeekerError>;

// Allow `?` on std::io::Error by converting to SeekerError::Io with unknown path.
impl From<std::io::Error> for SeekerError {
    fn from(source: std::io::Error) -> Self {
        SeekerError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for SeekerError {
    fn from(e: walkdir::Error) -> Self {
        SeekerError::Other(e.to_string())
    }
}
