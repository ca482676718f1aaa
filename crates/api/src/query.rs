//! Shared query parameter types for API handlers.

use netage_core::search::{clamp_limit, clamp_offset, contains_pattern, MAX_PAGE_LIMIT};
use serde::Deserialize;

/// Listing parameters (`?skip=&limit=&search=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

impl ListParams {
    /// Clamped `(limit, offset)` pair, using `default_limit` when no limit
    /// was supplied.
    pub fn page(&self, default_limit: i64) -> (i64, i64) {
        (
            clamp_limit(self.limit, default_limit, MAX_PAGE_LIMIT),
            clamp_offset(self.skip),
        )
    }

    /// `ILIKE` pattern for the search term, or `None` for a blank search.
    pub fn pattern(&self) -> Option<String> {
        self.search.as_deref().and_then(contains_pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let params = ListParams::default();
        assert_eq!(params.page(10), (10, 0));
        assert_eq!(params.pattern(), None);
    }

    #[test]
    fn limit_is_capped_and_search_wrapped() {
        let params = ListParams {
            skip: Some(20),
            limit: Some(10_000),
            search: Some("kirana".to_string()),
        };
        assert_eq!(params.page(10), (MAX_PAGE_LIMIT, 20));
        assert_eq!(params.pattern().as_deref(), Some("%kirana%"));
    }
}
