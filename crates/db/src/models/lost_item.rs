//! Lost-and-found item entity (`objeto` table).
//!
//! Column names in the database are the lowercase folding of the camelCase
//! names clients use (`dataExpiracao` is stored as `dataexpiracao`), so the
//! row struct renames on both sides.

use campus_core::date::parse_expiration;
use campus_core::error::CoreError;
use campus_core::fields::{is_provided, require_all, take_required};
use campus_core::patch::{coalesce_falsy, coalesce_present, double_option, non_empty};
use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `objeto` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LostItem {
    pub id: DbId,
    pub titulo: String,
    pub descricao: Option<String>,
    pub categoria: String,
    pub local: String,
    #[sqlx(rename = "dataexpiracao")]
    pub data_expiracao: Timestamp,
    pub foto: Option<String>,
    /// Stored as sent. Nothing verifies it yet.
    #[sqlx(rename = "palavrapasse")]
    pub palavra_passe: String,
    #[sqlx(rename = "contatoinstagram")]
    pub contato_instagram: Option<String>,
    #[sqlx(rename = "contatowhatsapp")]
    pub contato_whatsapp: Option<String>,
    pub denuncia: bool,
    #[sqlx(rename = "statusdenuncia")]
    pub status_denuncia: bool,
}

/// Column values written by insert and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LostItemFields {
    pub titulo: String,
    pub descricao: Option<String>,
    pub categoria: String,
    pub local: String,
    pub data_expiracao: Timestamp,
    pub foto: Option<String>,
    pub palavra_passe: String,
    pub contato_instagram: Option<String>,
    pub contato_whatsapp: Option<String>,
    pub denuncia: bool,
    pub status_denuncia: bool,
}

/// DTO for creating an item.
///
/// `titulo`, `categoria`, `local`, `dataExpiracao` and `palavraPasse` are
/// required. Empty optional text is stored as NULL; flags default to `false`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLostItem {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub categoria: Option<String>,
    pub local: Option<String>,
    pub data_expiracao: Option<String>,
    pub foto: Option<String>,
    pub palavra_passe: Option<String>,
    pub contato_instagram: Option<String>,
    pub contato_whatsapp: Option<String>,
    pub denuncia: Option<bool>,
    pub status_denuncia: Option<bool>,
}

impl CreateLostItem {
    pub fn validate(self) -> Result<LostItemFields, CoreError> {
        require_all(&[
            ("titulo", self.titulo.as_deref()),
            ("categoria", self.categoria.as_deref()),
            ("local", self.local.as_deref()),
            ("dataExpiracao", self.data_expiracao.as_deref()),
            ("palavraPasse", self.palavra_passe.as_deref()),
        ])?;

        let data_expiracao = parse_expiration(&take_required("dataExpiracao", self.data_expiracao)?)?;

        Ok(LostItemFields {
            titulo: take_required("titulo", self.titulo)?,
            descricao: non_empty(self.descricao),
            categoria: take_required("categoria", self.categoria)?,
            local: take_required("local", self.local)?,
            data_expiracao,
            foto: non_empty(self.foto),
            palavra_passe: take_required("palavraPasse", self.palavra_passe)?,
            contato_instagram: non_empty(self.contato_instagram),
            contato_whatsapp: non_empty(self.contato_whatsapp),
            denuncia: self.denuncia.unwrap_or(false),
            status_denuncia: self.status_denuncia.unwrap_or(false),
        })
    }
}

/// DTO for updating an item.
///
/// Required columns keep the stored value when missing, `null` or empty.
/// Nullable columns keep it only when the key is absent: `null` clears the
/// column and `""` is written as-is. An explicit `null` flag is written as
/// `false`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLostItem {
    pub titulo: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub descricao: Option<Option<String>>,
    pub categoria: Option<String>,
    pub local: Option<String>,
    pub data_expiracao: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub foto: Option<Option<String>>,
    pub palavra_passe: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub contato_instagram: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub contato_whatsapp: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub denuncia: Option<Option<bool>>,
    #[serde(default, deserialize_with = "double_option")]
    pub status_denuncia: Option<Option<bool>>,
}

impl UpdateLostItem {
    /// Lay this update over the stored row.
    ///
    /// Fails only if a provided `dataExpiracao` cannot be parsed.
    pub fn merge(&self, current: &LostItem) -> Result<LostItemFields, CoreError> {
        let data_expiracao = match self.data_expiracao.as_deref() {
            Some(raw) if is_provided(Some(raw)) => parse_expiration(raw)?,
            _ => current.data_expiracao,
        };

        Ok(LostItemFields {
            titulo: coalesce_falsy(self.titulo.as_deref(), &current.titulo),
            descricao: coalesce_present(&self.descricao, &current.descricao),
            categoria: coalesce_falsy(self.categoria.as_deref(), &current.categoria),
            local: coalesce_falsy(self.local.as_deref(), &current.local),
            data_expiracao,
            foto: coalesce_present(&self.foto, &current.foto),
            palavra_passe: coalesce_falsy(self.palavra_passe.as_deref(), &current.palavra_passe),
            contato_instagram: coalesce_present(&self.contato_instagram, &current.contato_instagram),
            contato_whatsapp: coalesce_present(&self.contato_whatsapp, &current.contato_whatsapp),
            denuncia: merge_flag(self.denuncia, current.denuncia),
            status_denuncia: merge_flag(self.status_denuncia, current.status_denuncia),
        })
    }
}

fn merge_flag(provided: Option<Option<bool>>, current: bool) -> bool {
    match provided {
        Some(value) => value.unwrap_or(false),
        None => current,
    }
}
