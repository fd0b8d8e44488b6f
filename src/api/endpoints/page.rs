//! Navigation endpoints: the per-session page selection.

use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, SessionId};
use crate::models::enums::Page;

#[derive(Serialize)]
pub struct PageResponse {
    pub page: &'static str,
}

/// `GET /api/page` — the current selection.
pub async fn current(
    State(ctx): State<ApiContext>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<PageResponse>, ApiError> {
    let handle = ctx.core.session(session_id.0)?;
    let session = handle.lock().await;

    Ok(Json(PageResponse {
        page: session.page().as_str(),
    }))
}

#[derive(Deserialize)]
pub struct NavigateRequest {
    pub page: String,
}

/// `PUT /api/page` — overwrite the selection. No history is kept.
pub async fn navigate(
    State(ctx): State<ApiContext>,
    Extension(session_id): Extension<SessionId>,
    Json(req): Json<NavigateRequest>,
) -> Result<Json<PageResponse>, ApiError> {
    let page = req.page.parse::<Page>()?;

    let handle = ctx.core.session(session_id.0)?;
    let mut session = handle.lock().await;
    session.navigate(page);

    Ok(Json(PageResponse {
        page: session.page().as_str(),
    }))
}
