//! Response payload types shared by handlers.
//!
//! Collections and single-row lookups are returned as bare JSON arrays;
//! mutations answer with a short confirmation message.

use campus_core::types::DbId;
use serde::Serialize;

/// `{ "mensagem": ... }` confirmation body.
#[derive(Debug, Serialize)]
pub struct Mensagem {
    pub mensagem: &'static str,
}

impl Mensagem {
    pub fn new(mensagem: &'static str) -> Self {
        Self { mensagem }
    }
}

/// Body returned by a successful create: confirmation plus the new id.
#[derive(Debug, Serialize)]
pub struct Created {
    pub mensagem: &'static str,
    pub id: DbId,
}
