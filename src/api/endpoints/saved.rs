//! Saved Responses page endpoint.

use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, SessionId};
use crate::models::SavedResponse;

#[derive(Serialize)]
pub struct SavedListResponse {
    pub saved: Vec<SavedResponse>,
}

/// `GET /api/saved` — saved answers in insertion order.
pub async fn list(
    State(ctx): State<ApiContext>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<SavedListResponse>, ApiError> {
    let handle = ctx.core.session(session_id.0)?;
    let session = handle.lock().await;

    Ok(Json(SavedListResponse {
        saved: session.saved().to_vec(),
    }))
}
