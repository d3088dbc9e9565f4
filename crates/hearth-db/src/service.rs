//! Service layer hosting every repository method.
//!
//! `HearthService` wraps `HearthDb` (raw database access). All repo methods
//! are implemented as `impl HearthService` blocks under `repos/`, and every
//! house-scoped method takes the caller's [`CallerContext`] explicitly.
//!
//! [`CallerContext`]: hearth_core::identity::CallerContext

use crate::HearthDb;
use crate::error::DatabaseError;

pub struct HearthService {
    db: HearthDb,
}

impl HearthService {
    /// Open (or create) a local database and wrap it.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = HearthDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `HearthDb` (for testing).
    #[must_use]
    pub const fn from_db(db: HearthDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &HearthDb {
        &self.db
    }
}
