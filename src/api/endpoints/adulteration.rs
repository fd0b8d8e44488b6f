//! Food Adulteration page endpoint.
//!
//! Same advisor, different surface: the answer is rendered directly on the
//! page and never appended to the chat transcript.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Deserialize)]
pub struct AdulterationRequest {
    pub question: String,
}

#[derive(Serialize)]
pub struct AdulterationResponse {
    pub response: String,
}

/// `POST /api/adulteration/check` — ask about adulteration detection.
/// An empty question is a visible 400 and appends nothing anywhere.
pub async fn check(
    State(ctx): State<ApiContext>,
    Json(req): Json<AdulterationRequest>,
) -> Result<Json<AdulterationResponse>, ApiError> {
    let dispatcher = ctx.core.dispatcher();
    dispatcher.validate(&req.question)?;

    let question = req.question;
    let response = tokio::task::spawn_blocking(move || dispatcher.ask(&question))
        .await
        .map_err(|e| ApiError::Internal(format!("model task failed: {e}")))??;

    Ok(Json(AdulterationResponse { response }))
}
