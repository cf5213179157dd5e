//! Request handlers.
//!
//! Each submodule provides async handler functions (list, create,
//! get_by_id, update, delete) for one table. Handlers validate the payload
//! before asking for the pool, delegate to the matching repository in
//! `campus_db` and map errors via [`AppError`](crate::error::AppError).

pub mod lost_item;
pub mod question;
