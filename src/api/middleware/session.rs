//! Session validation middleware.
//!
//! Extracts `X-Session-Id`, validates it against the session store (which
//! also touches the activity clock), and injects `SessionId` into request
//! extensions for downstream handlers.

use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, SessionId};

/// Header carrying the session id for session-scoped routes.
pub const SESSION_HEADER: &str = "X-Session-Id";

/// Require a live session on every request in the group.
pub async fn require_session(req: Request<axum::body::Body>, next: Next) -> Response {
    match require_session_inner(req, next).await {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

async fn require_session_inner(
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let ctx: ApiContext = req
        .extensions()
        .get::<ApiContext>()
        .cloned()
        .ok_or(ApiError::Internal("missing API context".into()))?;

    // 1. Extract the session id header
    let raw = req
        .headers()
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::BadRequest(format!("Missing {SESSION_HEADER} header")))?;

    let id = Uuid::parse_str(raw)
        .map_err(|_| ApiError::BadRequest(format!("Invalid {SESSION_HEADER} header")))?;

    // 2. Validate against the store; touches the session's activity clock
    ctx.core.session(id)?;

    // 3. Inject for downstream handlers
    req.extensions_mut().insert(SessionId(id));

    Ok(next.run(req).await)
}
