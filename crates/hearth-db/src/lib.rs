//! # hearth-db
//!
//! libSQL persistence for Hearth.
//!
//! Holds every relational table (houses, users, items, recipes, recipe
//! ingredients, shopping lists, chores) and the two aggregate queries behind
//! recipe suggestion. Repository methods live on [`service::HearthService`];
//! this module only owns the connection, migrations, and id generation.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and the single connection every repo method uses.
pub struct HearthDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl HearthDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let hearth_db = Self { db, conn };
        hearth_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(hearth_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"rcp-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> HearthDb {
        HearthDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "houses",
            "users",
            "items",
            "recipes",
            "recipe_ingredients",
            "shopping_lists",
            "shopping_list_items",
            "chores",
            "chore_completions",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("rcp").await.unwrap();
        assert!(id.starts_with("rcp-"), "ID should start with 'rcp-': {id}");
        assert_eq!(id.len(), 12, "3 prefix + 1 dash + 8 hex: {id}");
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in hearth_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_enforced() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO items (id, house_id, name, category, unit, created_at, updated_at) \
                 VALUES ('itm-1', 'hse-missing', 'Flour', 'pantry', 'g', '', '')",
                (),
            )
            .await;
        assert!(result.is_err(), "item without a house should be rejected");
    }

    #[tokio::test]
    async fn ingredient_pair_is_unique() {
        let db = test_db().await;
        let conn = db.conn();
        conn.execute_batch(
            "INSERT INTO houses (id, name, created_at, updated_at) VALUES ('hse-1', 'H', '', '');
             INSERT INTO items (id, house_id, name, category, unit, created_at, updated_at)
               VALUES ('itm-1', 'hse-1', 'Flour', 'pantry', 'g', '', '');
             INSERT INTO recipes (id, house_id, title, type, created_at, updated_at)
               VALUES ('rcp-1', 'hse-1', 'Bread', 'MEAL', '', '');
             INSERT INTO recipe_ingredients
               (id, recipe_id, item_id, quantity, created_at, updated_at)
               VALUES ('ing-1', 'rcp-1', 'itm-1', '2', '', '');",
        )
        .await
        .unwrap();

        let dup = conn
            .execute(
                "INSERT INTO recipe_ingredients \
                 (id, recipe_id, item_id, quantity, created_at, updated_at) \
                 VALUES ('ing-2', 'rcp-1', 'itm-1', '3', '', '')",
                (),
            )
            .await;
        assert!(dup.is_err(), "duplicate (recipe, item) should be rejected");
    }
}
