//! Shared constants used across the application.

/// Upstream demo API origin.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Client-side request timeout applied to every upstream call.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Demo credentials sent to the login endpoint.
pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "demo123";

/// Token stored when the login endpoint does not hand one out.
///
/// The upstream never verifies it; it only has to be present.
pub const FALLBACK_TOKEN: &str = "demo-token-123";

/// User agent sent with upstream requests.
pub const USER_AGENT: &str = concat!("placeholder-search/", env!("CARGO_PKG_VERSION"));

/// Number of distinct queries kept in the search history.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Maximum characters of a description shown on a result card.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 150;
