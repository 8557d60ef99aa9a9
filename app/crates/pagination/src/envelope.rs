//! Decoded envelope for one page of a paginated listing.

use serde::{Deserialize, Serialize};

use crate::PageNumber;

/// One page of results plus the pagination metadata reported by the server.
///
/// Every field defaults when absent: a response without `data` decodes as an
/// empty page rather than an error, and a missing `total_pages` reads as 0,
/// which callers treat as "no further pages".
///
/// # Examples
/// ```
/// use pagination::{Page, PageNumber};
///
/// let page: Page<u32> = serde_json::from_str(
///     r#"{"page":1,"per_page":2,"total":4,"total_pages":2,"data":[1,2]}"#,
/// )
/// .expect("valid envelope");
/// assert!(page.has_more_after(PageNumber::first()));
/// assert_eq!(page.data, vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Page number echoed by the server (1-based; 0 when omitted).
    #[serde(default)]
    pub page: u32,
    /// Page size the server applied.
    #[serde(default)]
    pub per_page: u32,
    /// Total number of records across every page.
    #[serde(default)]
    pub total: u64,
    /// Total number of pages in the listing at the time of this response.
    #[serde(default)]
    pub total_pages: u32,
    /// Records on this page, in server order.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 0,
            total: 0,
            total_pages: 0,
            data: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    /// Return whether a page after `current` exists according to this
    /// envelope.
    ///
    /// Only this envelope's `total_pages` is consulted; earlier observations
    /// are irrelevant because the server may change the count between calls.
    #[must_use]
    pub const fn has_more_after(&self, current: PageNumber) -> bool {
        current.get() < self.total_pages
    }

    /// Return whether the page carries no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert the records while keeping the pagination metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for envelope decoding defaults and continuation checks.

    use super::*;
    use rstest::rstest;

    #[test]
    fn missing_fields_decode_as_empty_page() {
        let page: Page<u32> = serde_json::from_str("{}").expect("empty object decodes");
        assert_eq!(page, Page::default());
        assert!(page.is_empty());
        assert!(!page.has_more_after(PageNumber::first()));
    }

    #[test]
    fn full_envelope_keeps_record_order() {
        let page: Page<u32> = serde_json::from_str(
            r#"{"page":2,"per_page":3,"total":9,"total_pages":3,"data":[4,5,6]}"#,
        )
        .expect("full envelope decodes");
        assert_eq!(page.page, 2);
        assert_eq!(page.per_page, 3);
        assert_eq!(page.total, 9);
        assert_eq!(page.data, vec![4, 5, 6]);
    }

    #[rstest]
    #[case(0, 1, false)]
    #[case(1, 1, false)]
    #[case(2, 1, true)]
    #[case(3, 2, true)]
    #[case(3, 3, false)]
    #[case(2, 5, false)]
    fn has_more_after_compares_against_latest_total(
        #[case] total_pages: u32,
        #[case] current: u32,
        #[case] expected: bool,
    ) {
        let page: Page<u32> = Page {
            total_pages,
            ..Page::default()
        };
        let current_page = PageNumber::new(current).expect("non-zero");
        assert_eq!(page.has_more_after(current_page), expected);
    }

    #[test]
    fn map_preserves_metadata() {
        let page = Page {
            page: 1,
            per_page: 2,
            total: 2,
            total_pages: 1,
            data: vec![1_u32, 2],
        };
        let mapped = page.map(|value| value * 10);
        assert_eq!(mapped.data, vec![10, 20]);
        assert_eq!(mapped.total_pages, 1);
        assert_eq!(mapped.per_page, 2);
    }
}
