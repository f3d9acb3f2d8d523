//! Error types for layout storage.

use gymfloor_core::LayoutError;
use std::io;
use thiserror::Error;

/// Errors reported by a [`crate::LayoutStore`].
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Layout not found: {0}")]
    NotFound(String),

    #[error("Layout already exists: {0}")]
    AlreadyExists(String),

    /// Id that cannot be used as a storage key
    #[error("Invalid layout id: {0:?}")]
    InvalidId(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored document violates the layout invariants
    #[error("Invalid layout: {0}")]
    Invalid(#[from] LayoutError),

    /// The backing store is unreachable
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
