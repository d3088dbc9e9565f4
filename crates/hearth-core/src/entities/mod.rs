//! Entity structs for all Hearth domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `hearth-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod chore;
mod house;
mod item;
mod recipe;
mod shopping;
mod user;

pub use chore::{Chore, ChoreCompletion};
pub use house::{House, HouseDetail};
pub use item::{Item, ItemRef};
pub use recipe::{IngredientDetail, Recipe, RecipeDetail, RecipeIngredient, RecipeSummary};
pub use shopping::{
    ShoppingLine, ShoppingLineDetail, ShoppingList, ShoppingListDetail, ShoppingListSummary,
};
pub use user::User;
