//! Local libSQL database configuration.

use serde::{Deserialize, Serialize};

/// Default database file, relative to the working directory.
fn default_path() -> String {
    String::from(".hearth/hearth.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// In-memory databases are discarded when the process exits.
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
