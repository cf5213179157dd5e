/// Primary keys are decoded as `BIGINT`. Queries cast `id` to `int8`, so
/// tables keyed by `SERIAL` (int4) decode the same way as `BIGSERIAL`.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
