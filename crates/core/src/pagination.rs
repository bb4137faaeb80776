//! Page/limit arithmetic for paginated listings.
//!
//! Pages are 1-based. Neither `page` nor `limit` is validated here: whatever
//! offset results is handed to the store, which decides what a negative
//! offset means (PostgreSQL rejects it).

/// Page used when the caller does not specify one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Number of rows to skip to reach the start of `page`.
pub fn skip_for_page(page: i64, limit: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// `ceil(total / limit)`. A non-positive `limit` yields `0` pages.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 || total <= 0 {
        return 0;
    }
    total / limit + i64::from(total % limit != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_skips_nothing() {
        assert_eq!(skip_for_page(1, 10), 0);
    }

    #[test]
    fn later_pages_skip_whole_pages() {
        assert_eq!(skip_for_page(3, 10), 20);
        assert_eq!(skip_for_page(2, 7), 7);
    }

    #[test]
    fn page_zero_gives_negative_skip() {
        assert_eq!(skip_for_page(0, 10), -10);
        assert_eq!(skip_for_page(-1, 5), -10);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(3, 1), 3);
    }

    #[test]
    fn non_positive_limit_has_no_pages() {
        assert_eq!(total_pages(5, 0), 0);
        assert_eq!(total_pages(5, -2), 0);
    }

    #[test]
    fn skip_saturates_instead_of_overflowing() {
        assert_eq!(skip_for_page(i64::MAX, i64::MAX), i64::MAX);
    }
}
