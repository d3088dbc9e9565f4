pub mod chore;
pub mod dispatch;
pub mod house;
pub mod item;
pub mod recipe;
pub mod shared;
pub mod shopping;
pub mod user;
