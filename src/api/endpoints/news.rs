//! News page endpoints. Purely static data; no model call involved.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::enums::NewsCategory;
use crate::models::NewsArticle;
use crate::news;

#[derive(Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct NewsResponse {
    pub articles: Vec<NewsArticle>,
}

/// `GET /api/news?category=Recalls` — filtered article list.
/// Absent or `All` means no filter.
pub async fn list(
    State(_ctx): State<ApiContext>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<NewsResponse>, ApiError> {
    let filter = match query.category.as_deref() {
        None | Some("All") => None,
        Some(raw) => Some(raw.parse::<NewsCategory>()?),
    };

    let articles = news::filter_articles(filter)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(NewsResponse { articles }))
}

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<&'static str>,
}

/// `GET /api/news/categories` — filter options for the News page.
pub async fn categories() -> Json<CategoriesResponse> {
    let mut categories = vec!["All"];
    categories.extend(NewsCategory::ALL.iter().map(|c| c.as_str()));
    Json(CategoriesResponse { categories })
}
