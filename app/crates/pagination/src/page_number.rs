//! Validated 1-based page index.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Query parameter carrying the requested page number.
pub const PAGE_QUERY_PARAM: &str = "page";

/// Errors raised while constructing or advancing a [`PageNumber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageNumberError {
    /// Page numbers start at 1.
    #[error("page number must be at least 1")]
    Zero,
    /// Advancing past `u32::MAX` is not representable.
    #[error("page number {current} cannot be advanced further")]
    Overflow {
        /// Page number that could not be incremented.
        current: u32,
    },
}

/// A 1-based page index.
///
/// ## Invariants
/// - The wrapped value is always at least 1.
///
/// # Examples
/// ```
/// use pagination::PageNumber;
///
/// let first = PageNumber::first();
/// let second = first.next().expect("page 2 is representable");
/// assert_eq!(second.get(), 2);
/// assert!(PageNumber::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page of any listing.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Validate and construct a page number.
    ///
    /// # Errors
    ///
    /// Returns [`PageNumberError::Zero`] when `value` is 0.
    pub const fn new(value: u32) -> Result<Self, PageNumberError> {
        match NonZeroU32::new(value) {
            Some(inner) => Ok(Self(inner)),
            None => Err(PageNumberError::Zero),
        }
    }

    /// Return page 1.
    #[must_use]
    pub const fn first() -> Self {
        Self::FIRST
    }

    /// Return the raw 1-based value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Return the page that follows this one.
    ///
    /// # Errors
    ///
    /// Returns [`PageNumberError::Overflow`] when this is already `u32::MAX`.
    pub const fn next(self) -> Result<Self, PageNumberError> {
        match self.0.checked_add(1) {
            Some(inner) => Ok(Self(inner)),
            None => Err(PageNumberError::Overflow {
                current: self.0.get(),
            }),
        }
    }

    /// Write this page number into `url` as the `page` query parameter.
    ///
    /// Any existing `page` parameter is replaced; other parameters are kept in
    /// their original order.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageNumber;
    /// use url::Url;
    ///
    /// let mut url = Url::parse("https://example.test/api/users?page=9&sort=asc")
    ///     .expect("valid url");
    /// PageNumber::new(3).expect("non-zero").apply_to(&mut url);
    /// assert_eq!(url.query(), Some("sort=asc&page=3"));
    /// ```
    pub fn apply_to(self, url: &mut Url) {
        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != PAGE_QUERY_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(PAGE_QUERY_PARAM, &self.get().to_string());
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageNumber {
    type Error = PageNumberError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageNumber> for u32 {
    fn from(value: PageNumber) -> Self {
        value.get()
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for page-number validation and URL encoding.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(u32::MAX)]
    fn accepts_positive_values(#[case] raw: u32) {
        let page = PageNumber::new(raw).expect("positive page numbers are valid");
        assert_eq!(page.get(), raw);
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(PageNumber::new(0), Err(PageNumberError::Zero));
    }

    #[test]
    fn next_increments_by_one() {
        let page = PageNumber::first().next().expect("page 2");
        assert_eq!(page.get(), 2);
    }

    #[test]
    fn next_reports_overflow_at_the_upper_bound() {
        let last = PageNumber::new(u32::MAX).expect("max is non-zero");
        assert_eq!(
            last.next(),
            Err(PageNumberError::Overflow { current: u32::MAX })
        );
    }

    #[rstest]
    #[case("https://example.test/api/users", "page=4")]
    #[case("https://example.test/api/users?page=1", "page=4")]
    #[case("https://example.test/api/users?delay=2&page=1", "delay=2&page=4")]
    fn apply_to_replaces_existing_page_parameter(#[case] base: &str, #[case] expected: &str) {
        let mut url = Url::parse(base).expect("valid base url");
        PageNumber::new(4).expect("non-zero").apply_to(&mut url);
        assert_eq!(url.query(), Some(expected));
    }

    #[test]
    fn deserialising_zero_fails() {
        let result: Result<PageNumber, _> = serde_json::from_str("0");
        assert!(result.is_err(), "zero must not decode as a page number");
    }

    #[test]
    fn serialises_as_plain_integer() {
        let encoded = serde_json::to_string(&PageNumber::new(7).expect("non-zero"))
            .expect("page number serialises");
        assert_eq!(encoded, "7");
    }
}
