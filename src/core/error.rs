// Error type shared by the user handlers

use crate::models::response::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Terminal failure of a single request
///
/// The `Display` text is the client-facing message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Lookup miss from `GET /usuarios/{id}`; the parsed id is echoed back
    #[error("Usuário não encontrado")]
    UserNotFound { id: Option<i64> },

    /// Lookup miss from `DELETE /usuarios/{id}`
    #[error("Usuário não encontrado")]
    RemoveTargetMissing,

    #[error("Nome e email são obrigatórios")]
    MissingFields,

    #[error("Email já está em uso")]
    EmailInUse,

    /// The user store cannot be read (its lock was poisoned)
    #[error("Dados de usuários não disponíveis")]
    Unavailable,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UserNotFound { .. } | ApiError::RemoveTargetMissing => StatusCode::NOT_FOUND,
            ApiError::MissingFields | ApiError::EmailInUse => StatusCode::BAD_REQUEST,
            ApiError::Unavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let id = match &self {
            ApiError::UserNotFound { id } => Some(*id),
            _ => None,
        };

        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
                id,
            }),
        )
            .into_response()
    }
}
