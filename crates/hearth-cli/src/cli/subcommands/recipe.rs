use clap::Subcommand;

/// Recipe entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RecipeCommands {
    /// Create a recipe.
    Create {
        #[arg(long)]
        title: String,
        /// meal or dessert
        #[arg(long = "type")]
        recipe_type: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        text: Option<String>,
    },
    /// Get a recipe with its ingredients.
    Get { id: String },
    /// Update a recipe.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long = "type")]
        recipe_type: Option<String>,
        /// Replace the tag set.
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Remove every tag.
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long, conflicts_with = "notes")]
        clear_notes: bool,
        #[arg(long)]
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        clear_text: bool,
    },
    /// Delete a recipe and its ingredients.
    Delete { id: String },
    /// Add an item to a recipe (merges with an existing ingredient).
    AddIngredient {
        recipe: String,
        #[arg(long)]
        item: String,
        #[arg(long)]
        quantity: String,
        #[arg(long)]
        unit: Option<String>,
    },
    /// Update an ingredient's quantity or unit.
    UpdateIngredient {
        recipe: String,
        ingredient: String,
        #[arg(long)]
        quantity: Option<String>,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long, conflicts_with = "unit")]
        clear_unit: bool,
    },
    /// Remove an ingredient from a recipe.
    RemoveIngredient { recipe: String, ingredient: String },
    /// Search recipes by text, type, tags or item.
    Search {
        /// Title/text substring or exact tag.
        #[arg(long)]
        query: Option<String>,
        #[arg(long = "type")]
        recipe_type: Option<String>,
        /// Match recipes carrying any of these tags.
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Only recipes using this item.
        #[arg(long)]
        item: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Suggest recipes cookable from the items on hand.
    Suggest {
        /// Available item IDs (repeatable or comma-separated).
        #[arg(long, value_delimiter = ',')]
        have: Vec<String>,
        #[arg(long = "type")]
        recipe_type: Option<String>,
        /// Missing ingredients tolerated per recipe.
        #[arg(long)]
        missing: Option<u32>,
    },
}
