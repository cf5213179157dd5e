//! Merge helpers for partial updates.
//!
//! Two coalescing rules exist side by side:
//!
//! - **falsy**: a missing, `null` or empty-string value keeps the stored
//!   value. Required text columns use this, so they can never be cleared.
//! - **presence**: only a missing key keeps the stored value; an explicit
//!   `null` or `""` is written. Nullable columns use this.
//!
//! Presence needs to tell "key absent" from "key is `null`", which plain
//! `Option<T>` cannot do with serde. Fields using it are declared as
//! `Option<Option<T>>` with `#[serde(default, deserialize_with = "double_option")]`.

use serde::{Deserialize, Deserializer};

/// Deserialize a present key into `Some(inner)`, where `inner` is `None` for
/// an explicit `null`. Paired with `#[serde(default)]`, an absent key stays
/// `None`.
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Falsy coalescing for required text columns.
pub fn coalesce_falsy(provided: Option<&str>, current: &str) -> String {
    match provided {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => current.to_string(),
    }
}

/// Presence coalescing for nullable columns.
pub fn coalesce_present<T: Clone>(provided: &Option<Option<T>>, current: &Option<T>) -> Option<T> {
    match provided {
        Some(value) => value.clone(),
        None => current.clone(),
    }
}

/// Drop empty strings, used where an empty optional value is stored as NULL.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
