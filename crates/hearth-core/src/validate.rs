//! Input normalisation and validation shared by every repository.
//!
//! Text is trimmed before it is checked; optional text that trims to empty
//! becomes `None`. Quantities are exact decimals and must be strictly positive.

use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};

use crate::errors::CoreError;

/// Trim `value` and reject it if nothing is left.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming `field` when the trimmed value is empty.
pub fn require_text(value: &str, field: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Trim optional text; blank becomes `None`.
#[must_use]
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Parse a strictly positive exact decimal quantity.
///
/// # Errors
///
/// Returns `CoreError::Validation` for blank, non-numeric, zero, or negative input.
pub fn parse_quantity(raw: &str) -> Result<BigDecimal, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("quantity must not be empty"));
    }
    let qty = BigDecimal::from_str(trimmed)
        .map_err(|e| CoreError::validation(format!("invalid quantity '{trimmed}': {e}")))?;
    if qty <= BigDecimal::zero() {
        return Err(CoreError::validation(format!(
            "quantity must be greater than zero, got '{trimmed}'"
        )));
    }
    Ok(qty)
}

/// Lower-case and trim an email address; it must contain `@`.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the address is blank or has no `@`.
pub fn normalize_email(raw: &str) -> Result<String, CoreError> {
    let email = require_text(raw, "email")?.to_lowercase();
    if !email.contains('@') {
        return Err(CoreError::validation(format!("invalid email '{email}'")));
    }
    Ok(email)
}

/// Trim tags, drop blanks and duplicates, keep first-seen order.
#[must_use]
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}
