use crate::models::{Category, SearchResult};

/// Result counts per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub total: usize,
    pub posts: usize,
    pub users: usize,
    pub albums: usize,
}

impl SearchStats {
    /// Count results by category, accepting both the list (`posts`) and the
    /// detail (`Post`) label. Results without a known category only count
    /// toward the total.
    #[must_use]
    pub fn from_results(results: &[SearchResult]) -> Self {
        results.iter().fold(
            Self {
                total: results.len(),
                ..Self::default()
            },
            |mut stats, result| {
                match result.category_kind() {
                    Some(Category::Posts) => stats.posts += 1,
                    Some(Category::Users) => stats.users += 1,
                    Some(Category::Albums) => stats.albums += 1,
                    None => {}
                }
                stats
            },
        )
    }

    #[must_use]
    pub const fn count(&self, category: Category) -> usize {
        match category {
            Category::Posts => self.posts,
            Category::Users => self.users,
            Category::Albums => self.albums,
        }
    }

    /// One-line summary shown under the counters.
    #[must_use]
    pub fn summary(&self, query: &str) -> String {
        let noun = if self.total == 1 { "result" } else { "results" };
        format!("Search for \"{query}\" returned {} {noun}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(category: Option<&str>) -> SearchResult {
        SearchResult {
            id: "1".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            author: None,
            published_at: None,
            url: None,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_counts_both_label_forms() {
        let results = vec![
            result(Some("posts")),
            result(Some("Post")),
            result(Some("users")),
            result(Some("Album")),
            result(Some("photos")),
            result(None),
        ];
        let stats = SearchStats::from_results(&results);
        assert_eq!(
            stats,
            SearchStats {
                total: 6,
                posts: 2,
                users: 1,
                albums: 1,
            }
        );
        assert_eq!(stats.count(Category::Posts), 2);
    }

    #[test]
    fn test_summary_pluralization() {
        let one = SearchStats::from_results(&[result(Some("posts"))]);
        assert_eq!(one.summary("qui"), "Search for \"qui\" returned 1 result");

        let none = SearchStats::from_results(&[]);
        assert_eq!(none.summary("zzz"), "Search for \"zzz\" returned 0 results");
    }
}
