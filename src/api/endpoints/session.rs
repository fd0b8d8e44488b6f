//! Session lifecycle endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: String,
    pub page: &'static str,
}

/// `POST /api/session` — start a session. The returned id goes into the
/// `X-Session-Id` header on all session-scoped routes.
pub async fn create(
    State(ctx): State<ApiContext>,
) -> Result<Json<SessionCreatedResponse>, ApiError> {
    let (id, page) = ctx.core.create_session()?;
    tracing::info!(session_id = %id, "Session started");

    Ok(Json(SessionCreatedResponse {
        session_id: id.to_string(),
        page: page.as_str(),
    }))
}
