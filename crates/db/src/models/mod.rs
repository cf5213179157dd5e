//! Row structs and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the table row
//! - A `Deserialize` create DTO whose fields are all optional, so missing
//!   fields are reported by the required-field check instead of serde
//! - A `Deserialize` update DTO carrying the merge rules for that table
//! - A plain "fields" struct holding the validated column values that the
//!   repository writes

pub mod lost_item;
pub mod question;
