//! Repository for the `questoes` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::{Question, QuestionFields};

/// Column list shared across queries. `id` is widened so `SERIAL` tables
/// decode into [`DbId`] too.
const COLUMNS: &str = "id::int8 AS id, enunciado, disciplina, tema, nivel";

/// Provides CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// List every question, in whatever order the database returns them.
    pub async fn list(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questoes");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// Find a question by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questoes WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a question, returning the generated id.
    pub async fn create(pool: &PgPool, fields: &QuestionFields) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO questoes (enunciado, disciplina, tema, nivel) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id::int8",
        )
        .bind(&fields.enunciado)
        .bind(&fields.disciplina)
        .bind(&fields.tema)
        .bind(&fields.nivel)
        .fetch_one(pool)
        .await
    }

    /// Rewrite all four content columns.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &QuestionFields,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE questoes SET \
                enunciado = $1, \
                disciplina = $2, \
                tema = $3, \
                nivel = $4 \
             WHERE id = $5",
        )
        .bind(&fields.enunciado)
        .bind(&fields.disciplina)
        .bind(&fields.tema)
        .bind(&fields.nivel)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a question by id.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questoes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
