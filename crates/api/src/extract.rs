//! Request extractors that answer rejections with the [`AppError`] envelope.
//!
//! axum's own `Json` and `Path` reply 415/422/400 with a plain-text body.
//! These wrappers route the rejection through [`AppError::BadRequest`] so
//! every malformed request gets `{"erro":"Dados inválidos","mensagem":…}`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `Json<T>` whose rejection is a 400 [`AppError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

/// `Path<T>` whose rejection is a 400 [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);
