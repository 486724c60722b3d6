//! Detail page for a single result.

use maud::{html, Markup};

use crate::components::{Alert, BaseLayout, CategoryBadge};
use crate::models::SearchResult;

/// Render the detail page for an item.
#[must_use]
pub fn render_detail_page(item: &SearchResult) -> Markup {
    let content = html! {
        p { a href="/" { "← Back" } }
        article class="detail" {
            header {
                h1 { (item.title) }
                p class="meta" {
                    @if let Some(category) = item.category.as_deref() {
                        (CategoryBadge::new(category))
                        " "
                    }
                    @if let Some(author) = &item.author {
                        span class="author" { "by " (author) }
                        " "
                    }
                    @if let Some(published_at) = &item.published_at {
                        time datetime=(published_at) { (published_at) }
                    }
                }
            }
            p class="detail-description" { (item.description) }
            @if let Some(url) = &item.url {
                footer {
                    a href=(url) target="_blank" rel="noopener noreferrer" { "View original" }
                }
            }
        }
    };

    BaseLayout::new(&item.title).render(content)
}

/// Render the page shown when a lookup returns nothing.
#[must_use]
pub fn render_item_not_found_page() -> Markup {
    let content = html! {
        p { a href="/" { "← Back" } }
        (Alert::error("Item not found"))
    };

    BaseLayout::new("Not found").render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_page() {
        let item = SearchResult {
            id: "1".to_string(),
            title: "Leanne Graham".to_string(),
            description: "Sincere@april.biz - 1-770-736-8031\n\nAddress: Kulas Light, Gwenborough"
                .to_string(),
            author: Some("Bret".to_string()),
            published_at: Some("2024-01-15T12:00:00.000Z".to_string()),
            url: Some("https://jsonplaceholder.typicode.com/users/1".to_string()),
            category: Some("User".to_string()),
        };
        let html = render_detail_page(&item).into_string();

        assert!(html.contains("<h1>Leanne Graham</h1>"));
        assert!(html.contains(">User<"));
        assert!(html.contains("by Bret"));
        assert!(html.contains("Address: Kulas Light"));
        assert!(html.contains("https://jsonplaceholder.typicode.com/users/1"));
        assert!(html.contains(r#"datetime="2024-01-15T12:00:00.000Z""#));
    }

    #[test]
    fn test_not_found_page() {
        let html = render_item_not_found_page().into_string();
        assert!(html.contains("Item not found"));
    }
}
