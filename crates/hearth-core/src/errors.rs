//! Cross-cutting error types for Hearth.
//!
//! This module defines errors that can originate from any crate in the system.
//! Storage-specific errors (`DatabaseError`) live in `hearth-db` and wrap
//! `CoreError` so the outer layer can still tell not-found from validation.

use thiserror::Error;

/// Errors that can be raised by any Hearth crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result, or the entity belongs to another house.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation (empty field, bad quantity, empty update).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The write collides with existing state (duplicate name, already in a house).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller does not belong to a house.
    #[error("Caller is not a member of any house")]
    NotInHouse,

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`].
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    /// Shorthand for a [`CoreError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
