//! Route table for the hub API.
//!
//! Two groups under `/api`:
//! - open routes: session creation, health, news, image analysis, the
//!   adulteration check, and chat suggestions — none touch session state
//!   except to create it
//! - session routes: everything reading or writing one session's transcript,
//!   saved list, or page selection; gated by the session middleware
//!
//! Middleware uses `Extension<ApiContext>` (injected as the outermost layer).
//! Endpoint handlers use `State<ApiContext>` (provided via `with_state`).

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the hub API router.
pub fn api_router(core: Arc<CoreState>) -> Router {
    let ctx = ApiContext::new(core);
    build_router(ctx)
}

fn build_router(ctx: ApiContext) -> Router {
    // Session-scoped routes — require a live X-Session-Id.
    //
    // Layers are applied from bottom (innermost) to top (outermost):
    // Extension must be outermost so the middleware can extract ApiContext.
    let session_routes = Router::new()
        .route("/chat/send", post(endpoints::chat::send))
        .route("/chat/transcript", get(endpoints::chat::transcript))
        .route("/chat/save", post(endpoints::chat::save))
        .route("/saved", get(endpoints::saved::list))
        .route(
            "/page",
            get(endpoints::page::current).put(endpoints::page::navigate),
        )
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn(
            middleware::session::require_session,
        ))
        .layer(axum::Extension(ctx.clone()));

    // Open routes — no session required.
    let open_routes = Router::new()
        .route("/session", post(endpoints::session::create))
        .route("/health", get(endpoints::health::check))
        .route("/news", get(endpoints::news::list))
        .route("/news/categories", get(endpoints::news::categories))
        .route("/image/analyze", post(endpoints::image::analyze))
        .route("/adulteration/check", post(endpoints::adulteration::check))
        .route("/chat/suggestions", get(endpoints::chat::suggestions))
        .with_state(ctx);

    // The dashboard runs in a browser on the same machine; allow it freely.
    Router::new()
        .nest("/api", session_routes)
        .nest("/api", open_routes)
        .layer(CorsLayer::permissive())
}
