use serde::Serialize;

use super::enums::NewsCategory;

/// A static news item. The catalog ships with the binary; there is no feed.
#[derive(Debug, Clone, Serialize)]
pub struct NewsArticle {
    pub category: NewsCategory,
    pub title: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
}
