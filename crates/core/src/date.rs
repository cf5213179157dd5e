//! Parsing of the `dataExpiracao` field.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Parse an expiration date/time sent by a client.
///
/// Accepts an RFC 3339 timestamp, kept at full precision and normalised to
/// UTC, or a plain `YYYY-MM-DD` date, read as midnight UTC.
pub fn parse_expiration(raw: &str) -> Result<Timestamp, CoreError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "dataExpiracao inválida: '{raw}' (use AAAA-MM-DD ou AAAA-MM-DDTHH:MM:SSZ)"
            ))
        })
}
