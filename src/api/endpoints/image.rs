//! Image Recognition page endpoint.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::vision::{self, ImageReport};

#[derive(Deserialize)]
pub struct ImageAnalyzeRequest {
    pub name: Option<String>,
    /// Base64 data URL (e.g., `data:image/jpeg;base64,/9j/...`) or raw base64.
    pub data: String,
}

/// `POST /api/image/analyze` — decode an uploaded JPEG/PNG and return the
/// placeholder analysis. Decode failures are 400s, never crashes.
pub async fn analyze(
    State(_ctx): State<ApiContext>,
    Json(req): Json<ImageAnalyzeRequest>,
) -> Result<Json<ImageReport>, ApiError> {
    let bytes = vision::decode_data_url(&req.data)?;
    let report = vision::analyze_image(&bytes)?;

    tracing::info!(
        name = req.name.as_deref().unwrap_or("unnamed"),
        format = report.format,
        width = report.width,
        height = report.height,
        "Image analyzed"
    );

    Ok(Json(report))
}
