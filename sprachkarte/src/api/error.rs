//! Erreurs HTTP

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Échec d'un handler ; toujours rendu en 500 générique
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] anyhow::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %format!("{:#}", self.0), "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "Internal Server Error" })),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
