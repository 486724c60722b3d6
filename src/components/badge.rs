//! Badge components for labelling search results.

use maud::{html, Markup, Render};

use crate::models::Category;

/// Colored badge showing a result's category label.
///
/// The label is rendered exactly as stored on the result (`posts` for list
/// results, `Post` for detail lookups); only the color depends on the
/// parsed category.
#[derive(Debug, Clone)]
pub struct CategoryBadge<'a> {
    label: &'a str,
    category: Option<Category>,
}

impl<'a> CategoryBadge<'a> {
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            category: Category::from_label(label),
        }
    }

    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.category {
            Some(Category::Posts) => "category-badge category-posts",
            Some(Category::Users) => "category-badge category-users",
            Some(Category::Albums) => "category-badge category-albums",
            None => "category-badge category-unknown",
        }
    }
}

impl Render for CategoryBadge<'_> {
    fn render(&self) -> Markup {
        html! {
            span class=(self.css_class()) { (self.label) }
        }
    }
}
