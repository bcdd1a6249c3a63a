use crate::domain::envelope::ErrorEnvelope;
use crate::utils::error::{ErrorKind, TriviaError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

impl From<&TriviaError> for ErrorEnvelope {
    fn from(error: &TriviaError) -> Self {
        ErrorEnvelope {
            success: false,
            error: error.status_code(),
            message: error.public_message().to_string(),
        }
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> Response {
        match self.kind() {
            ErrorKind::Internal | ErrorKind::Unprocessable => {
                tracing::error!("Request failed: {}", self)
            }
            _ => tracing::warn!("Request rejected: {}", self),
        }

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorEnvelope::from(&self))).into_response()
    }
}
