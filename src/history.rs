//! Most-recent-first list of distinct search queries.

/// Bounded search history.
///
/// A query already in the history keeps its position; new queries go to the
/// front and push the oldest entry out once the limit is reached.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: Vec<String>,
    limit: usize,
}

impl SearchHistory {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::with_capacity(limit),
            limit: limit.max(1),
        }
    }

    /// Record a query. Blank queries are ignored.
    pub fn record(&mut self, query: &str) {
        if query.trim().is_empty() || self.entries.iter().any(|entry| entry == query) {
            return;
        }
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.limit);
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
