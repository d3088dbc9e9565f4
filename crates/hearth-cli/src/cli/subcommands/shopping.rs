use clap::Subcommand;

/// Shopping list commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ShoppingCommands {
    /// Create a shopping list.
    Create {
        #[arg(long)]
        title: String,
    },
    /// List shopping lists with their line counts.
    List {
        #[arg(long)]
        archived: bool,
    },
    /// Show a list and its lines.
    Show { id: String },
    /// Add an item to a list (merges with an existing line).
    Add {
        list: String,
        #[arg(long)]
        item: String,
        #[arg(long)]
        quantity: String,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Remove a line from a list.
    Remove { list: String, line: String },
    /// Archive a list and clear its lines.
    Archive { id: String },
}
