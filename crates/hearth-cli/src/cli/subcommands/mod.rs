mod chore;
mod house;
mod item;
mod recipe;
mod shopping;
mod user;

pub use chore::ChoreCommands;
pub use house::HouseCommands;
pub use item::ItemCommands;
pub use recipe::RecipeCommands;
pub use shopping::ShoppingCommands;
pub use user::UserCommands;
