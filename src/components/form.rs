//! Form components for maud templates.

use maud::{html, Markup, Render};

/// A form container element.
#[derive(Debug)]
pub struct Form<'a> {
    /// Form action URL
    pub action: &'a str,
    /// HTTP method ("get" or "post")
    pub method: &'a str,
    /// Form content (inputs, buttons, etc.)
    pub content: Markup,
    /// Optional CSS class
    pub class: Option<&'a str>,
}

impl<'a> Form<'a> {
    #[must_use]
    pub fn new(action: &'a str, method: &'a str, content: Markup) -> Self {
        Self {
            action,
            method,
            content,
            class: None,
        }
    }

    #[must_use]
    pub fn post(action: &'a str, content: Markup) -> Self {
        Self::new(action, "post", content)
    }

    #[must_use]
    pub fn get(action: &'a str, content: Markup) -> Self {
        Self::new(action, "get", content)
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form action=(self.action) method=(self.method) class=[self.class] {
                (self.content)
            }
        }
    }
}

/// A select option.
#[derive(Debug, Clone, Copy)]
pub struct SelectOption<'a> {
    pub value: &'a str,
    pub label: &'a str,
}

/// A select dropdown element.
#[derive(Debug, Clone)]
pub struct Select<'a> {
    /// Select name attribute
    pub name: &'a str,
    /// Available options
    pub options: Vec<SelectOption<'a>>,
    /// Currently selected value
    pub selected: Option<&'a str>,
    /// Optional ID attribute
    pub id: Option<&'a str>,
}

impl<'a> Select<'a> {
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            options: Vec::new(),
            selected: None,
            id: None,
        }
    }

    /// Add a single option.
    #[must_use]
    pub fn option(mut self, value: &'a str, label: &'a str) -> Self {
        self.options.push(SelectOption { value, label });
        self
    }

    #[must_use]
    pub fn selected(mut self, selected: &'a str) -> Self {
        self.selected = Some(selected);
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Select<'_> {
    fn render(&self) -> Markup {
        html! {
            select name=(self.name) id=[self.id] {
                @for option in &self.options {
                    option value=(option.value) selected[self.selected == Some(option.value)] {
                        (option.label)
                    }
                }
            }
        }
    }
}

/// The query box plus category selector.
#[derive(Debug, Clone)]
pub struct SearchForm<'a> {
    pub query: &'a str,
    pub category: &'a str,
}

impl<'a> SearchForm<'a> {
    #[must_use]
    pub const fn new(query: &'a str, category: &'a str) -> Self {
        Self { query, category }
    }
}

impl Render for SearchForm<'_> {
    fn render(&self) -> Markup {
        let category_select = Select::new("category")
            .id("category")
            .option("all", "All")
            .option("posts", "Posts")
            .option("users", "Users")
            .option("albums", "Albums")
            .selected(self.category);

        let content = html! {
            fieldset role="group" {
                input
                    type="search"
                    name="q"
                    value=(self.query)
                    placeholder="Type your search..."
                    aria-label="Search";
                button type="submit" { "Search" }
            }
            label for="category" { "Category:" }
            (category_select)
        };

        Form::get("/", content).class("search-form").render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_post() {
        let html = Form::post("/history/clear", html! { button { "Clear" } })
            .render()
            .into_string();
        assert!(html.contains(r#"action="/history/clear""#));
        assert!(html.contains(r#"method="post""#));
        assert!(!html.contains("class="));
    }

    #[test]
    fn test_select_marks_selected_option() {
        let html = Select::new("category")
            .option("all", "All")
            .option("users", "Users")
            .selected("users")
            .render()
            .into_string();

        assert!(html.contains(r#"<option value="users" selected>Users</option>"#));
        assert!(html.contains(r#"<option value="all">All</option>"#));
    }

    #[test]
    fn test_search_form_keeps_query() {
        let html = SearchForm::new("sunt aut", "albums").render().into_string();

        assert!(html.contains(r#"name="q""#));
        assert!(html.contains(r#"value="sunt aut""#));
        assert!(html.contains(r#"<option value="albums" selected>Albums</option>"#));
        assert!(html.contains(r#"method="get""#));
    }
}
