use clap::Subcommand;

/// Pantry item commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ItemCommands {
    /// Add an item (revives an archived item with the same name).
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        unit: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// List items.
    List {
        /// Case-insensitive name substring.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// List archived items instead of active ones.
        #[arg(long)]
        archived: bool,
    },
    /// Get an item by ID.
    Get { id: String },
    /// Archive an item.
    Archive { id: String },
}
