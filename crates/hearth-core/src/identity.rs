use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Authenticated caller passed explicitly into every house-scoped operation.
///
/// Produced by the outer layer (CLI, or a request handler) after it has
/// resolved who is calling. Immutable: joining or leaving a house yields a
/// fresh context on the next lookup rather than mutating this one.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CallerContext {
    pub user_id: String,
    pub email: String,
    /// `None` = the caller has not created or joined a house yet.
    pub house_id: Option<String>,
}

impl CallerContext {
    /// Return the caller's house id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotInHouse` for house-less callers.
    pub fn require_house(&self) -> Result<&str, CoreError> {
        self.house_id.as_deref().ok_or(CoreError::NotInHouse)
    }
}
