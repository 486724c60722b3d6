//! Alert component for displaying error messages.

use maud::{html, Markup, Render};

/// An error message rendered as a styled article element.
///
/// # Example
///
/// ```ignore
/// use crate::components::alert::Alert;
///
/// let alert = Alert::error("Failed to fetch data. Try again.");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Alert<'a> {
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self { message }
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        html! {
            article class="error" role="alert" {
                (self.message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_alert() {
        let html = Alert::error("Failed to fetch users. Try again.")
            .render()
            .into_string();

        assert!(html.contains(r#"class="error""#));
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("Failed to fetch users. Try again."));
    }
}
