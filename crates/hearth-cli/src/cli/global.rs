use clap::ValueEnum;
use hearth_config::HearthConfig;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Single-line JSON.
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    pub db: Option<String>,
    pub user: Option<String>,
}

impl GlobalFlags {
    /// Apply `--db` and `--user` on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut HearthConfig) {
        if let Some(db) = &self.db {
            config.database.path.clone_from(db);
        }
        if let Some(user) = &self.user {
            config.general.user_id.clone_from(user);
        }
    }
}
