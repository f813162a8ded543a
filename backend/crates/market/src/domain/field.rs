//! Field parsing
//!
//! Form values arrive as text. Each helper either returns the typed value or
//! an `InvalidInput` naming the wire field.

use kernel::id::Id;

use crate::error::{MarketError, MarketResult};

/// Non-blank text, trimmed
pub fn required_text(field: &'static str, value: Option<String>) -> MarketResult<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_owned()),
        _ => Err(MarketError::invalid_input(field, "is required")),
    }
}

/// Free text; absent is empty
pub fn optional_text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_owned()).unwrap_or_default()
}

/// Whole number >= 0 (prices, stock)
pub fn non_negative(field: &'static str, value: Option<&str>) -> MarketResult<i64> {
    let n = whole_number(field, value)?;
    if n < 0 {
        return Err(MarketError::invalid_input(field, "must not be negative"));
    }
    Ok(n)
}

/// Reference to another row; must be > 0
pub fn positive_id<T>(field: &'static str, value: Option<&str>) -> MarketResult<Id<T>> {
    let n = whole_number(field, value)?;
    if n <= 0 {
        return Err(MarketError::invalid_input(field, "must be a positive id"));
    }
    Ok(Id::new(n))
}

/// `{id}` path segment
pub fn path_id<T>(raw: &str) -> MarketResult<Id<T>> {
    positive_id("id", Some(raw))
}

fn whole_number(field: &'static str, value: Option<&str>) -> MarketResult<i64> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| MarketError::invalid_input(field, "is required"))?;

    raw.parse::<i64>()
        .map_err(|_| MarketError::invalid_input(field, "must be a whole number"))
}
