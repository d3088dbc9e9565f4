use clap::Subcommand;

/// User account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Register a user.
    Create {
        #[arg(long)]
        email: String,
        /// Display name shown to other house members.
        #[arg(long)]
        name: String,
    },
    /// Show a user (defaults to the acting user).
    Show { id: Option<String> },
}
