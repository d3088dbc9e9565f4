//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some` fields
//! generate SET clauses in the dynamic UPDATE SQL. Nullable columns use
//! `Option<Option<T>>` so "clear" (`Some(None)`) differs from "leave alone" (`None`).
//! An update with no field set is rejected by the repository as a validation error.

pub mod ingredient;
pub mod recipe;
