use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Serialize;
use spm_contact::SendInput;

use crate::{error::AppError, routes::AppState};

pub const SENT_MESSAGE: &str = "E-mail enviado com sucesso";

#[derive(Serialize)]
pub struct SentBody {
    pub message: &'static str,
}

/// POST /api/send - relay a contact form to the operator inbox
pub async fn action(
    State(app_state): State<AppState>,
    input: Result<Json<SendInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = input?;

    app_state.relay.submit(input).await?;

    Ok(Json(SentBody {
        message: SENT_MESSAGE,
    }))
}
