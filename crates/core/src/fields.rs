//! Presence checks for required request fields.
//!
//! A text field counts as provided when it is present, not `null` and not
//! the empty string. Whitespace is content and is accepted as-is.

use crate::error::CoreError;

/// Whether an optional text value counts as provided.
pub fn is_provided(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty())
}

/// Check a set of `(name, value)` pairs, failing with
/// [`CoreError::MissingFields`] if any value is not provided.
///
/// Field order is preserved in both the `required` and `missing` lists.
pub fn require_all(fields: &[(&'static str, Option<&str>)]) -> Result<(), CoreError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| !is_provided(*value))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(CoreError::MissingFields {
        required: fields.iter().map(|(name, _)| *name).collect(),
        missing,
    })
}

/// Unwrap a value already checked by [`require_all`].
///
/// Returns an internal error instead of panicking if the check was skipped.
pub fn take_required(name: &'static str, value: Option<String>) -> Result<String, CoreError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CoreError::Internal(format!("required field '{name}' was not checked")))
}
