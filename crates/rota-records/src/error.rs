//! Error types for record store operations.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed records in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unknown surgeon: {0}")]
    UnknownSurgeon(String),

    #[error("unknown theatre: {0}")]
    UnknownTheatre(String),

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("unknown patient: {0}")]
    UnknownPatient(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
