//! # hearth-core
//!
//! Core types, ID prefixes, and error types for Hearth.
//!
//! This crate provides the foundational types shared across all Hearth crates:
//! - Entity structs for all domain objects (houses, items, recipes, lists, chores)
//! - Enums for recipe types and chore frequencies
//! - ID prefix constants
//! - The explicit caller context passed into every house-scoped operation
//! - Cross-cutting error types and input validation
//! - Pure ingredient-coverage ranking used by recipe suggestions
//! - Response types returned by search and suggestion

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod matching;
pub mod responses;
pub mod validate;
