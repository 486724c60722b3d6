//! Base layout components for the web UI.
//!
//! This module provides the main page layout structure including
//! the HTML skeleton, navigation, and footer.

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Critical theme initialization script that runs in <head> to prevent flash of wrong theme.
/// Must be inline (not external) to execute before body renders.
const THEME_INIT_SCRIPT: &str = r#"(function() {
    if (window.matchMedia('(prefers-color-scheme: dark)').matches) {
        document.documentElement.setAttribute('data-theme', 'dark');
    }
})();"#;

/// Page styles layered on top of Pico.
const PAGE_STYLE: &str = r"
.results-grid { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); }
.result-card h3 { margin-bottom: 0.5rem; font-size: 1.1rem; }
.result-card .meta { font-size: 0.85em; display: flex; gap: 0.75rem; align-items: center; }
.category-badge { padding: 0.1em 0.5em; border-radius: 4px; color: white; font-size: 0.8em; }
.category-posts { background-color: #667eea; }
.category-users { background-color: #28a745; }
.category-albums { background-color: #c79100; }
.category-unknown { background-color: #6c757d; }
.stats-grid { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(8rem, 1fr)); text-align: center; }
.stat-value { font-size: 1.5rem; font-weight: bold; }
.search-history ul { list-style: none; padding-left: 0; }
.detail-description { white-space: pre-line; }
";

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" data-theme="light" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="color-scheme" content="light dark";
                    title { (self.title) " - Placeholder Search" }
                    link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
                    link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🔍</text></svg>";
                    style { (PreEscaped(PAGE_STYLE)) }
                    script { (PreEscaped(THEME_INIT_SCRIPT)) }
                }
                body {
                    (Self::render_header())
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                }
            }
        }
    }

    fn render_header() -> Markup {
        html! {
            header class="container" {
                nav {
                    ul {
                        li {
                            a href="/" {
                                strong class="site-logo" { "Placeholder Search" }
                            }
                        }
                    }
                    ul {
                        li { a href="/" { "Search" } }
                        li { a href="/api/search" { "API" } }
                    }
                }
            }
        }
    }

    fn render_footer() -> Markup {
        html! {
            footer class="container" {
                small {
                    "Data from "
                    a href="https://jsonplaceholder.typicode.com" target="_blank" rel="noopener noreferrer" { "JSONPlaceholder" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_layout_basic_structure() {
        let content = html! { h1 { "Test Content" } };
        let page = BaseLayout::new("Test Page").render(content);
        let html = page.into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en" data-theme="light">"#));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains("<title>Test Page - Placeholder Search</title>"));
        assert!(html.contains("pico.min.css"));
        assert!(html.contains("<h1>Test Content</h1>"));
        assert!(html.contains(r#"<main class="container">"#));
    }

    #[test]
    fn test_base_layout_navigation() {
        let page = BaseLayout::new("Nav Test").render(html! { p { "Content" } });
        let html = page.into_string();

        assert!(html.contains(r#"<a href="/">Search</a>"#));
        assert!(html.contains(r#"<a href="/api/search">API</a>"#));
    }

    #[test]
    fn test_title_is_escaped() {
        let page = BaseLayout::new("<script>").render(html! {});
        let html = page.into_string();

        assert!(html.contains("<title>&lt;script&gt; - Placeholder Search</title>"));
    }
}
