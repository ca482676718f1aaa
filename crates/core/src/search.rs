//! Listing and search helpers shared by the party and product listings.
//!
//! Lives in `core` so the clamping and pattern rules can be tested without a
//! database.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default page size for the party summary listing.
pub const DEFAULT_PARTY_LIMIT: i64 = 10;

/// Default page size for the product catalogue listing.
pub const DEFAULT_PRODUCT_LIMIT: i64 = 100;

/// Upper bound for any paginated listing.
pub const MAX_PAGE_LIMIT: i64 = 500;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Substring patterns
// ---------------------------------------------------------------------------

/// Turn a free-text search term into an `ILIKE` substring pattern.
///
/// - Leading/trailing whitespace is ignored.
/// - `\`, `%` and `_` are escaped so they match literally.
/// - Empty or whitespace-only input returns `None` (no filtering).
///
/// # Examples
///
/// ```
/// use netage_core::search::contains_pattern;
/// assert_eq!(contains_pattern("kirana"), Some("%kirana%".to_string()));
/// assert_eq!(contains_pattern("50%"), Some("%50\\%%".to_string()));
/// assert_eq!(contains_pattern("  "), None);
/// ```
pub fn contains_pattern(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- clamp_limit ---------------------------------------------------------

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, DEFAULT_PARTY_LIMIT, MAX_PAGE_LIMIT), 10);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(10_000), 10, MAX_PAGE_LIMIT), MAX_PAGE_LIMIT);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(-5), 10, 100), 1);
        assert_eq!(clamp_limit(Some(0), 10, 100), 1);
    }

    #[test]
    fn clamp_limit_passes_through_valid_value() {
        assert_eq!(clamp_limit(Some(50), 10, 100), 50);
    }

    // -- clamp_offset --------------------------------------------------------

    #[test]
    fn clamp_offset_defaults_to_zero() {
        assert_eq!(clamp_offset(None), 0);
    }

    #[test]
    fn clamp_offset_rejects_negative() {
        assert_eq!(clamp_offset(Some(-3)), 0);
        assert_eq!(clamp_offset(Some(20)), 20);
    }

    // -- contains_pattern ----------------------------------------------------

    #[test]
    fn pattern_wraps_term() {
        assert_eq!(contains_pattern("SNET"), Some("%SNET%".to_string()));
    }

    #[test]
    fn pattern_trims_whitespace() {
        assert_eq!(contains_pattern("  lalit "), Some("%lalit%".to_string()));
    }

    #[test]
    fn pattern_escapes_wildcards() {
        assert_eq!(
            contains_pattern("a_b%c\\d"),
            Some("%a\\_b\\%c\\\\d%".to_string())
        );
    }

    #[test]
    fn pattern_empty_returns_none() {
        assert_eq!(contains_pattern(""), None);
        assert_eq!(contains_pattern("\t \n"), None);
    }
}
