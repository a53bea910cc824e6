//! Page/limit arithmetic for list endpoints.

/// Default page size when the client does not supply one.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Upper bound on a single page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Convert a 1-based page number into a row offset.
///
/// Pages below 1 are treated as page 1.
pub fn page_offset(page: Option<i64>, limit: i64) -> i64 {
    let page = page.unwrap_or(1).max(1);
    (page - 1).saturating_mul(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 10);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(500), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 100);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(0), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 1);
        assert_eq!(clamp_limit(Some(-3), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 1);
    }

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(page_offset(None, 10), 0);
        assert_eq!(page_offset(Some(1), 10), 0);
    }

    #[test]
    fn later_pages_skip_previous_rows() {
        assert_eq!(page_offset(Some(3), 25), 50);
    }

    #[test]
    fn non_positive_page_is_first_page() {
        assert_eq!(page_offset(Some(0), 10), 0);
        assert_eq!(page_offset(Some(-4), 10), 0);
    }
}
