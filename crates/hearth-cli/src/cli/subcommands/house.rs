use clap::Subcommand;

/// House membership commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HouseCommands {
    /// Create a house and move into it.
    Create {
        #[arg(long)]
        name: String,
    },
    /// Join an existing house by ID.
    Join { id: String },
    /// Leave the current house.
    Leave,
    /// Show the current house and its members.
    Show,
}
