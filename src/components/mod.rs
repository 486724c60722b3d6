//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout and navigation
//! - `alert`: Error messages
//! - `badge`: Category badges
//! - `card`: Result cards, grids, statistics, and empty states
//! - `form`: Form elements and the search form
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{Alert, BaseLayout, ResultGrid};
//!
//! fn my_page(results: &[SearchResult]) -> Markup {
//!     let content = html! {
//!         h1 { "Results" }
//!         (ResultGrid::new(results))
//!     };
//!     BaseLayout::new("Results").render(content)
//! }
//! ```

pub mod alert;
pub mod badge;
pub mod card;
pub mod form;
pub mod layout;

pub use alert::Alert;
pub use badge::CategoryBadge;
pub use card::{detail_href, truncate_text, EmptyState, ResultCard, ResultGrid, StatsCard};
pub use form::{Form, SearchForm, Select, SelectOption};
pub use layout::BaseLayout;
