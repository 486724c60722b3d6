use thiserror::Error;

use crate::models::Category;

/// A category search could not be completed.
///
/// The message is fixed per category and safe to show to users; the
/// underlying transport or decode failure is logged, not carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Failed to fetch data. Try again.")]
    Posts,
    #[error("Failed to fetch users. Try again.")]
    Users,
    #[error("Failed to fetch albums. Try again.")]
    Albums,
}

impl SearchError {
    #[must_use]
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Posts => Self::Posts,
            Category::Users => Self::Users,
            Category::Albums => Self::Albums,
        }
    }
}

/// The gateway could not be constructed.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Failure of a single upstream request.
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unauthorized (401)")]
    Unauthorized,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid JSON payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}
