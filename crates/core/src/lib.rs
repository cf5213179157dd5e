//! Domain building blocks shared by the database and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod date;
pub mod error;
pub mod fields;
pub mod patch;
pub mod types;
