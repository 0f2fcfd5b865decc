use std::any::Any;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use spm_contact::{RelayError, missing_fields};
use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "Campos obrigatórios faltando";
pub const SEND_FAILED_MESSAGE: &str = "Falha ao enviar e-mail";
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// Well-formed JSON whose fields are not strings
    #[error("invalid contact form: {0}")]
    InvalidForm(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => AppError::InvalidForm(err.body_text()),
            other => AppError::Unexpected(other.body_text()),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error) = match self {
            AppError::Relay(RelayError::Validation(errors)) => {
                tracing::warn!(
                    fields = %missing_fields(&errors).join(","),
                    "Contact form rejected: missing required fields"
                );
                (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE)
            }
            AppError::InvalidForm(msg) => {
                tracing::warn!(err = %msg, "Contact form rejected: invalid field");
                (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE)
            }
            AppError::Relay(RelayError::Provider(err)) => {
                tracing::error!(err = %err, "Failed to send contact e-mail");
                (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED_MESSAGE)
            }
            AppError::Unexpected(msg) => {
                tracing::error!(err = %msg, "Unexpected error while handling contact form");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status_code, Json(ErrorBody { error })).into_response()
    }
}

/// Response for a handler that panicked.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(err = %details, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: INTERNAL_ERROR_MESSAGE,
        }),
    )
        .into_response()
}
