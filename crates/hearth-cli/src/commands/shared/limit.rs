/// Compute effective limit with precedence: local arg -> global flag -> fallback.
///
/// A zero from either source falls through to the next one.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local
        .filter(|&n| n > 0)
        .or_else(|| global.filter(|&n| n > 0))
        .unwrap_or(fallback)
}
