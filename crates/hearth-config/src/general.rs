//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default suggestion limit.
const fn default_limit() -> u32 {
    20
}

/// Default search page size.
const fn default_page_size() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Id of the user the CLI acts as (e.g. `usr-a3f8b2c1`).
    #[serde(default)]
    pub user_id: String,

    /// Default result limit for recipe suggestions.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Default page size for recipe search.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            default_limit: default_limit(),
            default_page_size: default_page_size(),
        }
    }
}

impl GeneralConfig {
    /// Whether an acting user has been configured.
    pub fn has_user(&self) -> bool {
        !self.user_id.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(!config.has_user());
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.default_page_size, 20);
    }
}
