//! Static news catalog and its deterministic category filter.
//!
//! No feed, no fetch, no model call — the articles ship with the binary.

use crate::models::enums::NewsCategory;
use crate::models::NewsArticle;

/// The catalog shown on the News page.
const ARTICLES: &[NewsArticle] = &[
    NewsArticle {
        category: NewsCategory::Recalls,
        title: "Spinach Recall Due to Contamination",
        date: "2024-10-25",
        summary: "A major spinach supplier has recalled their products due to contamination.",
    },
    NewsArticle {
        category: NewsCategory::Advisories,
        title: "New Guidelines on Food Storage",
        date: "2024-10-24",
        summary: "The USDA has released new guidelines for safe food storage.",
    },
    NewsArticle {
        category: NewsCategory::Guidelines,
        title: "Updated Safe Minimum Cooking Temperatures",
        date: "2024-10-20",
        summary: "Poultry remains at 165°F (74°C); whole cuts of beef and pork at 145°F with a rest time.",
    },
    NewsArticle {
        category: NewsCategory::Research,
        title: "Study Links Improper Cooling to Outbreaks",
        date: "2024-10-18",
        summary: "Researchers found slow cooling of large batches to be a leading factor in bacterial growth.",
    },
];

/// All articles, newest first as authored.
pub fn articles() -> &'static [NewsArticle] {
    ARTICLES
}

/// Articles matching a category; `None` means no filter ("All").
pub fn filter_articles(category: Option<NewsCategory>) -> Vec<&'static NewsArticle> {
    ARTICLES
        .iter()
        .filter(|article| category.map_or(true, |c| article.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_returns_everything() {
        assert_eq!(filter_articles(None).len(), ARTICLES.len());
    }

    #[test]
    fn recalls_filter_returns_only_recalls() {
        let recalls = filter_articles(Some(NewsCategory::Recalls));
        assert_eq!(recalls.len(), 1);
        assert!(recalls.iter().all(|a| a.category == NewsCategory::Recalls));
        assert_eq!(recalls[0].title, "Spinach Recall Due to Contamination");
    }

    #[test]
    fn every_category_is_represented() {
        for category in NewsCategory::ALL {
            assert!(
                !filter_articles(Some(*category)).is_empty(),
                "no article for {category:?}"
            );
        }
    }

    #[test]
    fn articles_carry_dates() {
        for article in articles() {
            assert!(chrono::NaiveDate::parse_from_str(article.date, "%Y-%m-%d").is_ok());
        }
    }
}
