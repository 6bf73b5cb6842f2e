//! Page slicing and navigation window primitives.
//!
//! Listing endpoints hand an ordered collection, a raw `page` query value and a
//! [`PaginationConfig`] to [`build`]. The result is a [`Page`] carrying the
//! items for the requested page together with a [`PageWindow`] describing the
//! page numbers to render as navigation links.
//!
//! ```
//! use pagination::{PaginationConfig, build};
//!
//! let config = PaginationConfig::new(6, 4).expect("non-zero sizes");
//! let items: Vec<u32> = (1..=20).collect();
//! let page = build(Some("3"), items, &config);
//!
//! assert_eq!(page.items(), &[13, 14, 15, 16, 17, 18]);
//! assert_eq!(page.current_page(), 3);
//! assert_eq!(page.total_pages(), 4);
//! assert_eq!(page.navigation().pages(), &[1, 2, 3, 4]);
//! ```

mod config;
mod page;
mod page_number;
mod window;

pub use config::{DEFAULT_PAGE_SIZE, DEFAULT_WINDOW, PaginationConfig, PaginationError};
pub use page::{Page, build, paginate};
pub use page_number::PageNumber;
pub use window::PageWindow;
