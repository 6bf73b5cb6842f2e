//! A single page of items plus its navigation window.

use serde::Serialize;

use crate::{PageNumber, PageWindow, PaginationConfig};

/// Items for one page of an ordered collection.
///
/// Serialises as `{ "items": [...], "currentPage", "totalPages",
/// "totalItems", "pageSize", "navigation": {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    current_page: usize,
    total_pages: usize,
    total_items: usize,
    page_size: usize,
    navigation: PageWindow,
}

impl<T> Page<T> {
    /// Items on this page, in collection order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Consume the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Page number after clamping into the valid range.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages; one when the collection is empty.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Size of the whole collection.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Configured items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Navigation window around the current page.
    #[must_use]
    pub const fn navigation(&self) -> &PageWindow {
        &self.navigation
    }

    /// Convert every item while keeping the page metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            page_size: self.page_size,
            navigation: self.navigation,
        }
    }
}

/// Slice `items` to the requested page and compute its navigation window.
///
/// `requested` is the raw `page` query value. Anything that is not a positive
/// integer selects page one; pages past the end clamp to the last page.
///
/// # Examples
/// ```
/// use pagination::{PaginationConfig, build};
///
/// let config = PaginationConfig::new(6, 4).expect("non-zero sizes");
/// let page = build(Some("99"), (1..=20).collect::<Vec<u32>>(), &config);
/// assert_eq!(page.current_page(), 4);
/// assert_eq!(page.items(), &[19, 20]);
///
/// let empty = build(Some("1"), Vec::<u32>::new(), &config);
/// assert!(empty.items().is_empty());
/// assert_eq!(empty.navigation().pages(), &[1]);
/// ```
#[must_use]
pub fn build<T>(requested: Option<&str>, items: Vec<T>, config: &PaginationConfig) -> Page<T> {
    paginate(PageNumber::parse(requested), items, config)
}

/// Variant of [`build`] taking an already-parsed [`PageNumber`].
#[must_use]
pub fn paginate<T>(requested: PageNumber, items: Vec<T>, config: &PaginationConfig) -> Page<T> {
    let total_items = items.len();
    let page_size = config.page_size();
    let total_pages = config.total_pages(total_items);
    let current_page = requested.get().clamp(1, total_pages);
    let offset = current_page.saturating_sub(1).saturating_mul(page_size);

    let items = items.into_iter().skip(offset).take(page_size).collect();

    Page {
        items,
        current_page,
        total_pages,
        total_items,
        page_size,
        navigation: PageWindow::around(current_page, total_pages, config.window()),
    }
}
