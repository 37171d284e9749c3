//! Pagination Metadata
//!
//! Keeps `total_pages == ceil(total / limit)` internally consistent.

use serde::{Deserialize, Serialize};

use crate::models::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    /// Build metadata from raw counts. A zero limit is clamped to 1 so the
    /// ceiling division stays defined.
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit as u64) as u32;
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }

    /// Derive metadata from a backend list envelope.
    pub fn from_page<T>(page: &Page<T>) -> Self {
        Self::new(page.page, page.limit, page.total)
    }

    pub fn prev_page(&self) -> Option<u32> {
        (self.page > 1).then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        (self.page < self.total_pages).then(|| self.page + 1)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 10, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_of_total_over_limit() {
        let p = Pagination::new(1, 10, 25);
        assert_eq!(
            p,
            Pagination {
                page: 1,
                limit: 10,
                total: 25,
                total_pages: 3
            }
        );
        assert_eq!(Pagination::new(1, 10, 30).total_pages, 3);
        assert_eq!(Pagination::new(1, 10, 31).total_pages, 4);
        assert_eq!(Pagination::new(1, 10, 0).total_pages, 0);
    }

    #[test]
    fn zero_limit_is_clamped() {
        let p = Pagination::new(1, 0, 5);
        assert_eq!(p.limit, 1);
        assert_eq!(p.total_pages, 5);
    }

    #[test]
    fn adjacent_pages_respect_bounds() {
        let p = Pagination::new(1, 10, 25);
        assert_eq!(p.prev_page(), None);
        assert_eq!(p.next_page(), Some(2));

        let last = Pagination::new(3, 10, 25);
        assert_eq!(last.prev_page(), Some(2));
        assert_eq!(last.next_page(), None);
    }
}
