//! Database error types for hearth-db.

use hearth_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A domain rule rejected the operation (not found, validation, conflict).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A SQL query failed or a stored value could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Whether the boundary should report this as a missing resource.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotFound { .. }) | Self::NoResult)
    }

    /// Whether the boundary should report this as a bad request.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Core(CoreError::Validation(_)))
    }

    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Core(CoreError::Conflict(_)))
    }

    #[must_use]
    pub const fn is_not_in_house(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotInHouse))
    }
}

/// Turn a UNIQUE constraint failure into `CoreError::Conflict`; other libSQL
/// errors pass through unchanged.
pub(crate) fn conflict_on_unique(
    err: libsql::Error,
    message: impl FnOnce() -> String,
) -> DatabaseError {
    if err.to_string().contains("UNIQUE constraint failed") {
        DatabaseError::Core(CoreError::Conflict(message()))
    } else {
        DatabaseError::LibSql(err)
    }
}
