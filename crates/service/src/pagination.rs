//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs.

/// Pagination parameters
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Clamp to sane defaults and convert to zero-based (offset, limit).
    pub fn normalize(self) -> (usize, usize) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, 100);
        ((page - 1) as usize * per_page as usize, per_page as usize)
    }

    /// Window of `items` selected by this page; empty past the end.
    pub fn slice<T: Clone>(self, items: &[T]) -> Vec<T> {
        let (offset, limit) = self.normalize();
        items.iter().skip(offset).take(limit).cloned().collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, per_page: 20 }
    }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn normalize_clamps_zero_to_defaults() {
        let (offset, limit) = Pagination { page: 0, per_page: 0 }.normalize();
        assert_eq!(offset, 0);
        assert_eq!(limit, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (offset, limit) = Pagination { page: 5, per_page: 1000 }.normalize();
        assert_eq!(offset, 400);
        assert_eq!(limit, 100);
    }

    #[test]
    fn slice_past_end_is_empty() {
        let items = vec![1, 2, 3];
        let out = Pagination { page: 2, per_page: 10 }.slice(&items);
        assert!(out.is_empty());
    }

    #[test]
    fn slice_selects_window() {
        let items: Vec<u32> = (0..10).collect();
        let out = Pagination { page: 2, per_page: 3 }.slice(&items);
        assert_eq!(out, vec![3, 4, 5]);
    }
}
