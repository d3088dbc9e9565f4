use clap::Subcommand;

use crate::cli::subcommands::{
    ChoreCommands, HouseCommands, ItemCommands, RecipeCommands, ShoppingCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// User accounts.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Household membership.
    House {
        #[command(subcommand)]
        action: HouseCommands,
    },
    /// Pantry items.
    Item {
        #[command(subcommand)]
        action: ItemCommands,
    },
    /// Recipes, ingredients, search and suggestions.
    Recipe {
        #[command(subcommand)]
        action: RecipeCommands,
    },
    /// Shopping lists.
    Shopping {
        #[command(subcommand)]
        action: ShoppingCommands,
    },
    /// Household chores.
    Chore {
        #[command(subcommand)]
        action: ChoreCommands,
    },
}
