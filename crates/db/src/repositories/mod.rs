//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every statement is
//! parameterised; no transaction spans more than one statement.

pub mod lost_item_repo;
pub mod question_repo;

pub use lost_item_repo::LostItemRepo;
pub use question_repo::QuestionRepo;
