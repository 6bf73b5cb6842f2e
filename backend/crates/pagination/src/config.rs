//! Page size and window configuration.

use std::num::NonZeroUsize;

/// Items per page used when configuration does not override it.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Number of page links shown around the current page by default.
pub const DEFAULT_WINDOW: usize = 4;

/// Errors raised when constructing a [`PaginationConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// Page size was zero.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    /// Navigation window was zero.
    #[error("page window must be greater than zero")]
    ZeroWindow,
}

/// Validated pagination settings.
///
/// ## Invariants
/// - `page_size` and `window` are both at least one, so page arithmetic never
///   divides by zero.
///
/// # Examples
/// ```
/// use pagination::{PaginationConfig, PaginationError};
///
/// let config = PaginationConfig::new(9, 5).expect("valid sizes");
/// assert_eq!(config.page_size(), 9);
/// assert_eq!(PaginationConfig::new(0, 4), Err(PaginationError::ZeroPageSize));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    page_size: NonZeroUsize,
    window: NonZeroUsize,
}

impl PaginationConfig {
    /// Validate and construct a configuration.
    ///
    /// # Errors
    /// Returns [`PaginationError::ZeroPageSize`] or
    /// [`PaginationError::ZeroWindow`] when either value is zero.
    pub fn new(page_size: usize, window: usize) -> Result<Self, PaginationError> {
        let page_size = NonZeroUsize::new(page_size).ok_or(PaginationError::ZeroPageSize)?;
        let window = NonZeroUsize::new(window).ok_or(PaginationError::ZeroWindow)?;
        Ok(Self { page_size, window })
    }

    /// Items shown on a single page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Maximum number of page links in the navigation window.
    #[must_use]
    pub const fn window(&self) -> usize {
        self.window.get()
    }

    /// Number of pages needed for `total_items`; zero items still yield one
    /// (empty) page.
    #[must_use]
    pub const fn total_pages(&self, total_items: usize) -> usize {
        let pages = total_items.div_ceil(self.page_size.get());
        if pages == 0 { 1 } else { pages }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: NonZeroUsize::MIN.saturating_add(DEFAULT_PAGE_SIZE - 1),
            window: NonZeroUsize::MIN.saturating_add(DEFAULT_WINDOW - 1),
        }
    }
}
