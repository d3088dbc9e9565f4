use std::path::Path;

use anyhow::Context;
use hearth_config::HearthConfig;
use hearth_core::identity::CallerContext;
use hearth_db::service::HearthService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: HearthService,
    pub config: HearthConfig,
}

impl AppContext {
    /// Open the configured database, creating its parent directory if needed.
    pub async fn init(config: HearthConfig) -> anyhow::Result<Self> {
        let db_path = config.database.path.clone();
        if !config.database.is_in_memory() {
            ensure_parent_dir(Path::new(&db_path))?;
        }

        let service = HearthService::new_local(&db_path)
            .await
            .with_context(|| format!("failed to open hearth database at {db_path}"))?;
        tracing::debug!(path = %db_path, "hearth database ready");

        Ok(Self { service, config })
    }

    /// Resolve the acting user into a caller context.
    ///
    /// Looked up fresh on every call so house membership reflects stored state.
    pub async fn caller(&self) -> anyhow::Result<CallerContext> {
        let user_id = self
            .config
            .require_user_id()
            .context("no acting user; pass --user or set HEARTH_GENERAL__USER_ID")?;
        Ok(self.service.caller_for(user_id).await?)
    }
}

fn ensure_parent_dir(db_path: &Path) -> anyhow::Result<()> {
    match db_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display())),
        _ => Ok(()),
    }
}
