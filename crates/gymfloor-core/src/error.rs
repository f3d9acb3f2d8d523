//! Error handling for gymfloor
//!
//! Provides the error types of the layout model:
//! - Lookup errors (an id that no longer exists in the document)
//! - Geometry errors (rectangles that violate the positive-size invariant)
//! - Serialization errors (wire format decode/encode)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout model error type
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Zone id not present in the layout
    #[error("Zone not found: {id}")]
    ZoneNotFound {
        /// The missing zone id.
        id: String,
    },

    /// Machine id not present in its zone
    #[error("Machine {machine_id} not found in zone {zone_id}")]
    MachineNotFound {
        /// The owning zone id.
        zone_id: String,
        /// The missing machine id.
        machine_id: String,
    },

    /// Annex id not present in the layout
    #[error("Annex not found: {id}")]
    AnnexNotFound {
        /// The missing annex id.
        id: String,
    },

    /// Rectangle violates the positive-size invariant
    #[error("Invalid geometry for {entity}: {reason}")]
    InvalidGeometry {
        /// The entity the rectangle belongs to.
        entity: String,
        /// Why the geometry is invalid.
        reason: String,
    },

    /// Wire format (JSON) error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LayoutError {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        LayoutError::Other(msg.into())
    }

    /// Check if this error is a stale-id lookup failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LayoutError::ZoneNotFound { .. }
                | LayoutError::MachineNotFound { .. }
                | LayoutError::AnnexNotFound { .. }
        )
    }
}

/// Result type using LayoutError
pub type Result<T> = std::result::Result<T, LayoutError>;
