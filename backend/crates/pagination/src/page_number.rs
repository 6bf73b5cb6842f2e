//! Lenient parsing of the `page` query parameter.

use std::num::{IntErrorKind, NonZeroUsize};

/// One-based page number requested by a client.
///
/// Parsing never fails: missing, non-numeric and non-positive values fall back
/// to the first page. Values too large for `usize` saturate so they clamp to
/// the last page later.
///
/// # Examples
/// ```
/// use pagination::PageNumber;
///
/// assert_eq!(PageNumber::parse(Some("3")).get(), 3);
/// assert_eq!(PageNumber::parse(Some("abc")).get(), 1);
/// assert_eq!(PageNumber::parse(Some("-2")).get(), 1);
/// assert_eq!(PageNumber::parse(None).get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Parse a raw query value.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        raw.map_or(Self::FIRST, Self::parse_str)
    }

    fn parse_str(raw: &str) -> Self {
        let parsed = match raw.trim().parse::<usize>() {
            Ok(value) => value,
            Err(error) if matches!(error.kind(), IntErrorKind::PosOverflow) => usize::MAX,
            Err(_) => return Self::FIRST,
        };
        NonZeroUsize::new(parsed).map_or(Self::FIRST, Self)
    }

    /// Construct from a plain number, treating zero as the first page.
    #[must_use]
    pub fn new(value: usize) -> Self {
        NonZeroUsize::new(value).map_or(Self::FIRST, Self)
    }

    /// The page number as a plain integer.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<Option<&str>> for PageNumber {
    fn from(value: Option<&str>) -> Self {
        Self::parse(value)
    }
}
