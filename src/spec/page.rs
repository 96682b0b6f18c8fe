//! Pagination: the request-side window and the result-side page record.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// An offset/limit pagination window.
///
/// `skip` rows are dropped, then at most `take` rows are returned. For a
/// 1-based page number, `skip = (page - 1) * page_size` and `take = page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    skip: usize,
    take: usize,
}

impl PageWindow {
    /// Creates a window, rejecting a non-positive `take`.
    pub fn new(skip: usize, take: usize) -> Result<Self, ValidationError> {
        if take == 0 {
            return Err(ValidationError::InvalidPageSize(take));
        }
        Ok(Self { skip, take })
    }

    /// Creates a window from a 1-based page number and page size.
    pub fn from_page(page: u32, page_size: usize) -> Result<Self, ValidationError> {
        if page == 0 {
            return Err(ValidationError::InvalidPageNumber(page));
        }
        Self::new((page as usize - 1) * page_size, page_size)
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn take(&self) -> usize {
        self.take
    }

    /// Applies the window to an already filtered, already sorted row set.
    pub fn apply<T>(&self, rows: Vec<T>) -> Vec<T> {
        rows.into_iter().skip(self.skip).take(self.take).collect()
    }
}

/// One page of results plus the metadata a paginated view needs.
///
/// `total_items` counts every match, pagination-independent; `total_pages` is
/// `ceil(total_items / page_size)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number this page represents.
    pub page_number: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl<T> Page<T> {
    /// Builds a page record, deriving the paging metadata.
    pub fn new(items: Vec<T>, total_items: u64, page_number: u32, page_size: usize) -> Self {
        let total_pages = if page_size > 0 {
            total_items.div_ceil(page_size as u64) as u32
        } else {
            1
        };

        Self {
            items,
            page_number,
            total_pages,
            total_items,
            has_previous_page: page_number > 1,
            has_next_page: page_number < total_pages,
        }
    }

    /// A page with no results.
    pub fn empty(page_number: u32) -> Self {
        Self {
            items: Vec::new(),
            page_number,
            total_pages: 0,
            total_items: 0,
            has_previous_page: page_number > 1,
            has_next_page: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_rejects_zero_take() {
        assert_eq!(
            PageWindow::new(0, 0),
            Err(ValidationError::InvalidPageSize(0))
        );
    }

    #[test]
    fn window_rejects_page_zero() {
        assert_eq!(
            PageWindow::from_page(0, 10),
            Err(ValidationError::InvalidPageNumber(0))
        );
    }

    #[test]
    fn from_page_computes_skip() {
        let w = PageWindow::from_page(1, 10).unwrap();
        assert_eq!((w.skip(), w.take()), (0, 10));

        let w = PageWindow::from_page(3, 10).unwrap();
        assert_eq!((w.skip(), w.take()), (20, 10));
    }

    #[test]
    fn apply_skips_then_takes() {
        let w = PageWindow::new(2, 2).unwrap();
        assert_eq!(w.apply(vec![1, 2, 3, 4, 5]), vec![3, 4]);
    }

    #[test]
    fn total_pages_is_ceiling() {
        // 25 items at 10 per page -> 3 pages.
        let page = Page::new(Vec::<i64>::new(), 25, 1, 10);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_previous_page);
        assert!(page.has_next_page);

        let last = Page::new(Vec::<i64>::new(), 25, 3, 10);
        assert!(last.has_previous_page);
        assert!(!last.has_next_page);
    }

    #[test]
    fn single_page_has_no_neighbors() {
        let page = Page::new(vec![1, 2, 3], 3, 1, 10);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn wire_shape_uses_camel_case() {
        let page = Page::new(vec![1], 1, 1, 10);
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("pageNumber").is_some());
        assert!(json.get("totalPages").is_some());
        assert!(json.get("totalItems").is_some());
        assert!(json.get("hasPreviousPage").is_some());
        assert!(json.get("hasNextPage").is_some());
    }
}
