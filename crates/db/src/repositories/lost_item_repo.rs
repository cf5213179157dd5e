//! Repository for the `objeto` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::lost_item::{LostItem, LostItemFields};

/// Column list shared across queries. `id` is widened so `SERIAL` tables
/// decode into [`DbId`] too.
const COLUMNS: &str = "id::int8 AS id, titulo, descricao, categoria, local, dataExpiracao, foto, \
    palavraPasse, contatoInstagram, contatoWhatsapp, denuncia, statusDenuncia";

/// Provides CRUD operations for lost-and-found items.
pub struct LostItemRepo;

impl LostItemRepo {
    /// List every item, in whatever order the database returns them.
    pub async fn list(pool: &PgPool) -> Result<Vec<LostItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM objeto");
        sqlx::query_as::<_, LostItem>(&query).fetch_all(pool).await
    }

    /// Find an item by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LostItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM objeto WHERE id = $1");
        sqlx::query_as::<_, LostItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an item, returning the generated id.
    pub async fn create(pool: &PgPool, fields: &LostItemFields) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO objeto (titulo, descricao, categoria, local, dataExpiracao, foto, \
                palavraPasse, contatoInstagram, contatoWhatsapp, denuncia, statusDenuncia) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING id::int8",
        )
        .bind(&fields.titulo)
        .bind(&fields.descricao)
        .bind(&fields.categoria)
        .bind(&fields.local)
        .bind(fields.data_expiracao)
        .bind(&fields.foto)
        .bind(&fields.palavra_passe)
        .bind(&fields.contato_instagram)
        .bind(&fields.contato_whatsapp)
        .bind(fields.denuncia)
        .bind(fields.status_denuncia)
        .fetch_one(pool)
        .await
    }

    /// Rewrite all eleven content columns.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &LostItemFields,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE objeto SET \
                titulo = $1, \
                descricao = $2, \
                categoria = $3, \
                local = $4, \
                dataExpiracao = $5, \
                foto = $6, \
                palavraPasse = $7, \
                contatoInstagram = $8, \
                contatoWhatsapp = $9, \
                denuncia = $10, \
                statusDenuncia = $11 \
             WHERE id = $12",
        )
        .bind(&fields.titulo)
        .bind(&fields.descricao)
        .bind(&fields.categoria)
        .bind(&fields.local)
        .bind(fields.data_expiracao)
        .bind(&fields.foto)
        .bind(&fields.palavra_passe)
        .bind(&fields.contato_instagram)
        .bind(&fields.contato_whatsapp)
        .bind(fields.denuncia)
        .bind(fields.status_denuncia)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an item by id.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM objeto WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
