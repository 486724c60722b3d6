//! Card components for displaying search results and statistics.

use maud::{html, Markup, Render};
use urlencoding::encode;

use crate::components::badge::CategoryBadge;
use crate::constants::DESCRIPTION_PREVIEW_CHARS;
use crate::models::{Category, SearchResult};
use crate::stats::SearchStats;

/// Cut `text` to `max_chars` characters, appending `...` when anything was cut.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// Link to the detail page of a result.
///
/// The category is lowercased so both label forms route to the same lookup.
#[must_use]
pub fn detail_href(result: &SearchResult) -> String {
    let category = result
        .category
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    format!("/detail/{}?category={}", encode(&result.id), encode(&category))
}

/// A card summarizing one search result.
#[derive(Debug, Clone)]
pub struct ResultCard<'a> {
    pub result: &'a SearchResult,
}

impl<'a> ResultCard<'a> {
    #[must_use]
    pub const fn new(result: &'a SearchResult) -> Self {
        Self { result }
    }
}

impl Render for ResultCard<'_> {
    fn render(&self) -> Markup {
        let result = self.result;

        html! {
            article class="result-card" {
                h3 {
                    a href=(detail_href(result)) { (result.title) }
                }
                p class="result-description" {
                    (truncate_text(&result.description, DESCRIPTION_PREVIEW_CHARS))
                }
                p class="meta" {
                    @if let Some(category) = result.category.as_deref() {
                        (CategoryBadge::new(category))
                    }
                    @if let Some(author) = &result.author {
                        span class="author" { "by " (author) }
                    }
                }
            }
        }
    }
}

/// A grid container for result cards.
#[derive(Debug, Clone)]
pub struct ResultGrid<'a> {
    pub results: &'a [SearchResult],
}

impl<'a> ResultGrid<'a> {
    #[must_use]
    pub const fn new(results: &'a [SearchResult]) -> Self {
        Self { results }
    }
}

impl Render for ResultGrid<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="results-grid" {
                @for result in self.results {
                    (ResultCard::new(result))
                }
            }
        }
    }
}

/// An empty state component for when a search found nothing.
#[derive(Debug, Clone, Copy)]
pub struct EmptyState<'a> {
    pub message: &'a str,
    pub hint: &'a str,
}

impl EmptyState<'_> {
    /// Create a "no results" empty state.
    #[must_use]
    pub const fn no_results() -> Self {
        Self {
            message: "No results found.",
            hint: "Try a different keyword or change the category.",
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="no-results" {
                p { (self.message) }
                p { small { (self.hint) } }
            }
        }
    }
}

/// Per-category result counts for the current search.
#[derive(Debug, Clone)]
pub struct StatsCard<'a> {
    pub stats: SearchStats,
    pub query: &'a str,
}

impl<'a> StatsCard<'a> {
    #[must_use]
    pub const fn new(stats: SearchStats, query: &'a str) -> Self {
        Self { stats, query }
    }
}

impl Render for StatsCard<'_> {
    fn render(&self) -> Markup {
        html! {
            article class="stats-card" {
                header { strong { "Search statistics" } }
                div class="stats-grid" {
                    div {
                        div class="stat-value" { (self.stats.total) }
                        small { "Total" }
                    }
                    @for category in Category::ALL {
                        div class=(format!("stat-{}", category.as_str())) {
                            div class="stat-value" { (self.stats.count(category)) }
                            small { (category.display_name()) }
                        }
                    }
                }
                footer { small { (self.stats.summary(self.query)) } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> SearchResult {
        SearchResult {
            id: "3".to_string(),
            title: "ea molestias quasi".to_string(),
            description: "et iusto sed quo iure".to_string(),
            author: Some("User 1".to_string()),
            published_at: Some("2024-01-15T12:00:00.000Z".to_string()),
            url: Some("https://jsonplaceholder.typicode.com/posts/3".to_string()),
            category: Some("posts".to_string()),
        }
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_text("abcdefghijk", 10), "abcdefghij...");
        // Multi-byte characters are counted, not bytes.
        assert_eq!(truncate_text("ééééé", 3), "ééé...");
    }

    #[test]
    fn test_detail_href_lowercases_category() {
        let mut result = sample_result();
        assert_eq!(detail_href(&result), "/detail/3?category=posts");

        result.category = Some("Post".to_string());
        assert_eq!(detail_href(&result), "/detail/3?category=post");
    }

    #[test]
    fn test_result_card() {
        let result = sample_result();
        let html = ResultCard::new(&result).render().into_string();

        assert!(html.contains("result-card"));
        assert!(html.contains("ea molestias quasi"));
        assert!(html.contains("/detail/3?category=posts"));
        assert!(html.contains("category-posts"));
        assert!(html.contains("by User 1"));
    }

    #[test]
    fn test_result_card_truncates_description() {
        let mut result = sample_result();
        result.description = "x".repeat(200);
        let html = ResultCard::new(&result).render().into_string();

        assert!(html.contains(&format!("{}...", "x".repeat(150))));
        assert!(!html.contains(&"x".repeat(151)));
    }

    #[test]
    fn test_result_grid() {
        let results = vec![sample_result(), sample_result()];
        let html = ResultGrid::new(&results).render().into_string();

        assert!(html.contains("results-grid"));
        assert_eq!(html.matches("result-card").count(), 2);
    }

    #[test]
    fn test_empty_state() {
        let html = EmptyState::no_results().render().into_string();
        assert!(html.contains("No results found."));
        assert!(html.contains("change the category"));
    }

    #[test]
    fn test_stats_card() {
        let results = vec![sample_result()];
        let stats = SearchStats::from_results(&results);
        let html = StatsCard::new(stats, "quasi").render().into_string();

        assert!(html.contains("stat-posts"));
        assert!(html.contains("Albums"));
        assert!(html.contains("Search for &quot;quasi&quot; returned 1 result"));
    }
}
