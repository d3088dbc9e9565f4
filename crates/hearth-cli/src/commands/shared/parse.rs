use serde::de::DeserializeOwned;

/// Parse an upper-case wire enum (`MEAL`, `WEEKLY`) from user input.
///
/// Accepts any case and hyphens in place of underscores.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_").to_ascii_uppercase();
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional enum flag.
pub fn parse_opt_enum<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<T>>
where
    T: DeserializeOwned,
{
    raw.map(|raw| parse_enum(raw, field)).transpose()
}
