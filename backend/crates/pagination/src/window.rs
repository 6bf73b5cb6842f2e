//! Sliding navigation window of page numbers.

use serde::Serialize;

/// Contiguous run of page numbers rendered as navigation links.
///
/// ## Invariants
/// - `pages` is non-empty, ascending and contained in `1..=total_pages`.
/// - `current_page` is always one of `pages`.
/// - `pages.len()` never exceeds the configured window or `total_pages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    pages: Vec<usize>,
    current_page: usize,
    total_pages: usize,
    first_page_out_of_range: bool,
    last_page_out_of_range: bool,
}

impl PageWindow {
    /// Compute the window for `current_page` out of `total_pages`.
    ///
    /// The current page sits at position `ceil(window / 2)` of the run, which
    /// is then shifted to stay within `1..=total_pages`. Out-of-range inputs
    /// are clamped: `total_pages` and `window` below one count as one, and
    /// `current_page` is clamped into the valid range.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageWindow;
    ///
    /// let window = PageWindow::around(10, 20, 4);
    /// assert_eq!(window.pages(), &[9, 10, 11, 12]);
    /// assert!(window.first_page_out_of_range());
    /// assert!(window.last_page_out_of_range());
    ///
    /// let tail = PageWindow::around(20, 20, 4);
    /// assert_eq!(tail.pages(), &[17, 18, 19, 20]);
    /// ```
    #[must_use]
    pub fn around(current_page: usize, total_pages: usize, window: usize) -> Self {
        let total_pages = total_pages.max(1);
        let window = window.max(1);
        let current_page = current_page.clamp(1, total_pages);
        let len = window.min(total_pages);

        let lead = window.div_ceil(2).saturating_sub(1);
        let mut first = current_page.saturating_sub(lead).max(1);
        let last_allowed_first = total_pages.saturating_sub(len).saturating_add(1);
        if first > last_allowed_first {
            first = last_allowed_first;
        }
        let last = first.saturating_add(len).saturating_sub(1);

        Self {
            pages: (first..=last).collect(),
            current_page,
            total_pages,
            first_page_out_of_range: first > 1,
            last_page_out_of_range: last < total_pages,
        }
    }

    /// Page numbers in ascending order.
    #[must_use]
    pub fn pages(&self) -> &[usize] {
        self.pages.as_slice()
    }

    /// The page the window is built around.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total number of pages available.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// `true` when page one is not part of the window.
    #[must_use]
    pub const fn first_page_out_of_range(&self) -> bool {
        self.first_page_out_of_range
    }

    /// `true` when the last page is not part of the window.
    #[must_use]
    pub const fn last_page_out_of_range(&self) -> bool {
        self.last_page_out_of_range
    }
}
