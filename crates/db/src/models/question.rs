//! Quiz question entity (`questoes` table).

use campus_core::error::CoreError;
use campus_core::fields::{require_all, take_required};
use campus_core::patch::coalesce_falsy;
use campus_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `questoes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub enunciado: String,
    pub disciplina: String,
    pub tema: String,
    pub nivel: String,
}

/// Column values written by insert and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionFields {
    pub enunciado: String,
    pub disciplina: String,
    pub tema: String,
    pub nivel: String,
}

/// DTO for creating a question. Every field is required and non-empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestion {
    pub enunciado: Option<String>,
    pub disciplina: Option<String>,
    pub tema: Option<String>,
    pub nivel: Option<String>,
}

impl CreateQuestion {
    pub fn validate(self) -> Result<QuestionFields, CoreError> {
        require_all(&[
            ("enunciado", self.enunciado.as_deref()),
            ("disciplina", self.disciplina.as_deref()),
            ("tema", self.tema.as_deref()),
            ("nivel", self.nivel.as_deref()),
        ])?;

        Ok(QuestionFields {
            enunciado: take_required("enunciado", self.enunciado)?,
            disciplina: take_required("disciplina", self.disciplina)?,
            tema: take_required("tema", self.tema)?,
            nivel: take_required("nivel", self.nivel)?,
        })
    }
}

/// DTO for updating a question. Missing, `null` or empty fields keep the
/// stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuestion {
    pub enunciado: Option<String>,
    pub disciplina: Option<String>,
    pub tema: Option<String>,
    pub nivel: Option<String>,
}

impl UpdateQuestion {
    /// Lay this update over the stored row.
    pub fn merge(&self, current: &Question) -> QuestionFields {
        QuestionFields {
            enunciado: coalesce_falsy(self.enunciado.as_deref(), &current.enunciado),
            disciplina: coalesce_falsy(self.disciplina.as_deref(), &current.disciplina),
            tema: coalesce_falsy(self.tema.as_deref(), &current.tema),
            nivel: coalesce_falsy(self.nivel.as_deref(), &current.nivel),
        }
    }
}
