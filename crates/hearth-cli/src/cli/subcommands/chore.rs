use clap::Subcommand;

/// Chore commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChoreCommands {
    /// Create a chore.
    Create {
        #[arg(long)]
        title: String,
        /// daily, weekly or monthly
        #[arg(long)]
        frequency: String,
        /// Assignee user ID (must be a house member).
        #[arg(long)]
        assign: Option<String>,
    },
    /// List chores.
    List {
        #[arg(long)]
        archived: bool,
    },
    /// Record a completion.
    Complete {
        id: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// Archive a chore.
    Archive { id: String },
    /// Change the assignee. Omit --to to unassign.
    Reassign {
        id: String,
        #[arg(long)]
        to: Option<String>,
    },
}
