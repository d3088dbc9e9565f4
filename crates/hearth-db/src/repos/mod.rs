//! Repository modules implementing operations for every Hearth entity.
//!
//! Each module adds methods to `HearthService` via `impl HearthService` blocks.

pub mod chore;
pub mod house;
pub mod ingredient;
pub mod item;
pub mod recipe;
pub mod search;
pub mod shopping;
pub mod suggest;
pub mod user;
