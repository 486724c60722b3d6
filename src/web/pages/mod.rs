//! Maud-based page templates for the web UI.
//!
//! Each page module exports a render function that produces the complete HTML.

pub mod detail;
pub mod search;

pub use detail::{render_detail_page, render_item_not_found_page};
pub use search::{render_search_page, SearchPageParams};
