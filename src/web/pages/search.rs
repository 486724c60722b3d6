//! Search page for the web UI.
//!
//! Shows the search form, the recent query history, and either the
//! results of the current search, an error, or an empty state.

use maud::{html, Markup, Render};
use urlencoding::encode;

use crate::components::{Alert, BaseLayout, EmptyState, Form, ResultGrid, SearchForm, StatsCard};
use crate::models::SearchResult;
use crate::stats::SearchStats;

/// Parameters for rendering the search page.
#[derive(Debug)]
pub struct SearchPageParams<'a> {
    /// The search query string (empty if no search performed)
    pub query: &'a str,
    /// Selected category value (`all`, `posts`, `users`, `albums`)
    pub category: &'a str,
    /// Results of the search
    pub results: &'a [SearchResult],
    /// Message of a failed search
    pub error: Option<&'a str>,
    /// Recent queries, most recent first
    pub history: &'a [String],
}

/// Render the search page.
#[must_use]
pub fn render_search_page(params: &SearchPageParams<'_>) -> Markup {
    let searched = !params.query.trim().is_empty();

    let content = html! {
        h1 { "Search posts, users and albums" }

        (SearchForm::new(params.query, params.category))

        @if !params.history.is_empty() {
            (SearchHistoryList::new(params.history, params.category))
        }

        @if let Some(error) = params.error {
            (Alert::error(error))
        } @else if searched && params.results.is_empty() {
            (EmptyState::no_results())
        } @else if !params.results.is_empty() {
            (StatsCard::new(SearchStats::from_results(params.results), params.query))
            h2 { "Results (" (params.results.len()) ")" }
            (ResultGrid::new(params.results))
        }
    };

    BaseLayout::new("Search").render(content)
}

/// Recent queries as links that re-run the search.
struct SearchHistoryList<'a> {
    entries: &'a [String],
    category: &'a str,
}

impl<'a> SearchHistoryList<'a> {
    const fn new(entries: &'a [String], category: &'a str) -> Self {
        Self { entries, category }
    }
}

impl Render for SearchHistoryList<'_> {
    fn render(&self) -> Markup {
        html! {
            details class="search-history" {
                summary { "History" }
                ul {
                    @for entry in self.entries {
                        li {
                            a href=(format!("/?q={}&category={}", encode(entry), encode(self.category))) {
                                (entry)
                            }
                        }
                    }
                }
                (Form::post("/history/clear", html! {
                    button type="submit" class="secondary outline" { "Clear" }
                }))
            }
        }
    }
}
