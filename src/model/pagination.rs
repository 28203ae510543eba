//! Pagination arithmetic (pure).
//!
//! Derives the visible record range and first/last-page flags from the
//! server-reported page, page size and total, and clamps page navigation.

use std::fmt;

/// Display window for one page of results.
///
/// All values are derived; nothing here is fetched or cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based index of the first record on the page (0 when the page is empty).
    pub range_start: u64,
    /// 1-based index of the last record on the page.
    pub range_end: u64,
    /// Total records matching the current filters.
    pub total_results: u64,
    /// Whether the page is the first one.
    pub is_first_page: bool,
    /// Whether the page is the last one.
    pub is_last_page: bool,
    /// Highest reachable page number. Never below 1.
    pub last_page: u32,
}

impl PageWindow {
    /// Compute the window for `page` given `page_size` and `total_results`.
    ///
    /// A zero `page_size` is treated as 1. With zero results the window is
    /// empty and the page counts as both first and last. A page past the end
    /// of the results (the total shrank since it was requested) also gets an
    /// empty window.
    pub fn compute(page: u32, page_size: u32, total_results: u64) -> Self {
        let page_size = u64::from(page_size.max(1));
        let page = page.max(1);
        let last_page = last_page(page_size, total_results);

        if total_results == 0 {
            return Self {
                range_start: 0,
                range_end: 0,
                total_results,
                is_first_page: true,
                is_last_page: true,
                last_page,
            };
        }

        let range_start = (u64::from(page) - 1) * page_size + 1;
        let (range_start, range_end) = if range_start > total_results {
            (0, 0)
        } else {
            (range_start, (u64::from(page) * page_size).min(total_results))
        };

        Self {
            range_start,
            range_end,
            total_results,
            is_first_page: page == 1,
            is_last_page: page >= last_page,
            last_page,
        }
    }

    /// Page reached by `nav` from `page`, clamped to `[1, last_page]`.
    pub fn navigate(&self, page: u32, nav: PageNavigation) -> u32 {
        let target = match nav {
            PageNavigation::First => 1,
            PageNavigation::Prev => page.saturating_sub(1),
            PageNavigation::Next => page.saturating_add(1),
            PageNavigation::Last => self.last_page,
        };
        target.clamp(1, self.last_page)
    }
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} of {}",
            self.range_start, self.range_end, self.total_results
        )
    }
}

/// Number of the page holding the final record; 1 when there are none.
fn last_page(page_size: u64, total_results: u64) -> u32 {
    let pages = total_results.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Page navigation requested from the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageNavigation {
    /// Jump to page 1.
    First,
    /// One page back.
    Prev,
    /// One page forward.
    Next,
    /// Jump to the last page.
    Last,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_partial_result_set() {
        let window = PageWindow::compute(1, 20, 45);
        assert_eq!(window.range_start, 1);
        assert_eq!(window.range_end, 20);
        assert!(window.is_first_page);
        assert!(!window.is_last_page);
        assert_eq!(window.last_page, 3);
    }

    #[test]
    fn last_page_is_truncated_to_total() {
        let window = PageWindow::compute(3, 20, 45);
        assert_eq!(window.range_start, 41);
        assert_eq!(window.range_end, 45);
        assert!(window.is_last_page);
        assert!(!window.is_first_page);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        let window = PageWindow::compute(2, 20, 40);
        assert_eq!(window.last_page, 2);
        assert!(window.is_last_page);
        assert_eq!(window.range_end, 40);
    }

    #[test]
    fn zero_results_is_first_and_last() {
        let window = PageWindow::compute(1, 20, 0);
        assert!(window.is_first_page);
        assert!(window.is_last_page);
        assert_eq!(window.last_page, 1);
        assert_eq!(window.range_start, 0);
        assert_eq!(window.range_end, 0);
    }

    #[test]
    fn zero_page_size_does_not_divide_by_zero() {
        let window = PageWindow::compute(1, 0, 3);
        assert_eq!(window.last_page, 3);
        assert_eq!(window.range_end, 1);
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let window = PageWindow::compute(1, 20, 45);
        assert_eq!(window.navigate(1, PageNavigation::Prev), 1);
        assert_eq!(window.navigate(3, PageNavigation::Next), 3);
        assert_eq!(window.navigate(2, PageNavigation::First), 1);
        assert_eq!(window.navigate(1, PageNavigation::Last), 3);
        assert_eq!(window.navigate(2, PageNavigation::Next), 3);
        assert_eq!(window.navigate(2, PageNavigation::Prev), 1);
    }

    #[test]
    fn navigation_pulls_stale_page_back_into_range() {
        // Result set shrank while we sat on page 7.
        let window = PageWindow::compute(7, 20, 45);
        assert_eq!(window.navigate(7, PageNavigation::Next), 3);
        assert_eq!(window.navigate(7, PageNavigation::Prev), 3);
    }

    #[test]
    fn page_beyond_shrunken_total_is_empty() {
        let window = PageWindow::compute(3, 20, 10);
        assert_eq!((window.range_start, window.range_end), (0, 0));
        assert!(window.is_last_page);
        assert!(!window.is_first_page);
        assert_eq!(window.last_page, 1);
        assert_eq!(window.navigate(3, PageNavigation::Prev), 1);
        insta::assert_snapshot!(window.to_string(), @"0 - 0 of 10");
    }

    #[test]
    fn display_reads_as_range_of_total() {
        insta::assert_snapshot!(PageWindow::compute(3, 20, 45).to_string(), @"41 - 45 of 45");
    }
}
