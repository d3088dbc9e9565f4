//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing of timestamps, enums, JSON tag
//! arrays, and decimal quantities.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use crate::error::DatabaseError;

/// Current time at storage precision, so values built in memory compare
/// equal to the same values read back.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Format a timestamp for storage.
///
/// Fixed-width UTC with microseconds, so lexical order in SQL equals
/// chronological order.
#[must_use]
pub fn timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00.000000Z"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with the upper-case wire values of `RecipeType` and `ChoreFrequency`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read an INTEGER 0/1 column as a bool.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// Read a non-negative INTEGER column (counts) as `u32`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the value is negative or too large.
pub fn get_count(row: &libsql::Row, idx: i32) -> Result<u32, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    u32::try_from(raw).map_err(|_| DatabaseError::Query(format!("count out of range: {raw}")))
}

/// Decode a JSON array of strings stored in a TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` on malformed JSON.
pub fn parse_tags(s: &str) -> Result<Vec<String>, DatabaseError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid tags JSON '{s}': {e}")))
}

/// Encode tags for storage.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn tags_to_json(tags: &[String]) -> Result<String, DatabaseError> {
    serde_json::to_string(tags).map_err(|e| DatabaseError::Other(e.into()))
}

/// Encode a list of ids as one JSON array parameter for `json_each(?N)`.
///
/// Keeps large `IN` filters to a single bound variable.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn id_list_json(ids: &[String]) -> Result<String, DatabaseError> {
    serde_json::to_string(ids).map_err(|e| DatabaseError::Other(e.into()))
}

/// Unicode-aware lowercase used for the `*_folded` search columns.
///
/// SQLite's `lower()` only folds ASCII.
#[must_use]
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Parse a stored decimal quantity.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the stored text is not a decimal.
pub fn parse_decimal(s: &str) -> Result<BigDecimal, DatabaseError> {
    BigDecimal::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid decimal '{s}': {e}")))
}

/// Canonical text form of a quantity (trailing zeros dropped).
#[must_use]
pub fn decimal_to_text(value: &BigDecimal) -> String {
    let text = value.to_string();
    if text.contains('.') && !text.contains(['e', 'E']) {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Build `?{start}, ?{start+1}, ...` for an `IN (...)` clause of `count` values.
#[must_use]
pub fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|idx| format!("?{idx}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn timestamp_is_fixed_width_and_round_trips() {
        let now = now();
        let text = timestamp(now);
        assert_eq!(text.len(), "2026-01-01T00:00:00.000000Z".len());
        assert_eq!(parse_datetime(&text).unwrap(), now);
    }

    #[test]
    fn parse_sqlite_datetime() {
        let dt = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(timestamp(dt), "2026-02-09T14:30:00.000000Z");
    }

    #[test]
    fn tags_round_trip() {
        let tags = vec!["quick".to_string(), "veg".to_string()];
        let json = tags_to_json(&tags).unwrap();
        assert_eq!(json, r#"["quick","veg"]"#);
        assert_eq!(parse_tags(&json).unwrap(), tags);
        assert!(parse_tags("").unwrap().is_empty());
    }

    #[test]
    fn decimal_text_is_canonical() {
        let qty = parse_decimal("5.00").unwrap();
        assert_eq!(decimal_to_text(&qty), "5");
        assert_eq!(decimal_to_text(&parse_decimal("0.250").unwrap()), "0.25");
    }

    #[test]
    fn fold_case_handles_accents() {
        assert_eq!(fold_case("CRÈME Brûlée"), "crème brûlée");
        assert_eq!(fold_case("ÉCLAIR"), fold_case("éclair"));
    }

    #[test]
    fn id_list_is_a_json_array() {
        let ids = vec!["itm-1".to_string(), "it\"m".to_string()];
        let json = id_list_json(&ids).unwrap();
        let back: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ids);
    }

    #[test]
    fn placeholders_are_numbered() {
        assert_eq!(placeholders(2, 3), "?2, ?3, ?4");
        assert_eq!(placeholders(1, 0), "");
    }
}
