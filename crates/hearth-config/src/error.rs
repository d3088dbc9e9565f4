//! Errors raised while loading or checking Hearth settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `HEARTH_*` variable could not be read into [`crate::HearthConfig`].
    #[error("failed to load hearth config: {0}")]
    Figment(#[from] figment::Error),

    /// A setting the current command depends on is empty.
    ///
    /// Raised for `general.user_id` when a house-scoped command runs without
    /// an acting user.
    #[error("'{section}' is not set; configure it in .hearth/config.toml or via HEARTH_ env vars")]
    NotConfigured { section: String },

    /// A setting is present but unusable.
    #[error("invalid hearth setting '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
