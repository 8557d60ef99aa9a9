//! Driven port for fetching one page of the people directory.
//!
//! The domain owns the request shape (a validated page number) and the
//! response contract (a page envelope of domain records) so the aggregator
//! never sees transport details.

use async_trait::async_trait;
use pagination::{Page, PageNumber};

use super::RemoteServiceError;
use crate::domain::UserRecord;

/// Port for issuing a single directory page request.
///
/// Implementations perform exactly one round trip per call and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Fetch one page of users.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use mypeople::domain::ports::{DirectoryClient, FixtureDirectoryClient};
    /// use pagination::PageNumber;
    ///
    /// let client = FixtureDirectoryClient::default();
    /// let page = client.fetch_page(PageNumber::first()).await?;
    /// assert!(page.data.is_empty());
    /// # Ok::<(), mypeople::domain::ports::RemoteServiceError>(())
    /// ```
    async fn fetch_page(&self, page: PageNumber) -> Result<Page<UserRecord>, RemoteServiceError>;
}

/// Fixture implementation serving a fixed set of pages from memory.
///
/// Requests past the last page yield an empty envelope that still reports the
/// configured page count.
#[derive(Debug, Clone, Default)]
pub struct FixtureDirectoryClient {
    pages: Vec<Vec<UserRecord>>,
}

impl FixtureDirectoryClient {
    /// Serve `pages` in order, starting at page 1.
    pub fn new(pages: Vec<Vec<UserRecord>>) -> Self {
        Self { pages }
    }
}

#[async_trait]
impl DirectoryClient for FixtureDirectoryClient {
    async fn fetch_page(&self, page: PageNumber) -> Result<Page<UserRecord>, RemoteServiceError> {
        let index = usize::try_from(page.get() - 1)
            .map_err(|err| RemoteServiceError::connection_failed(err.to_string()))?;
        let data = self.pages.get(index).cloned().unwrap_or_default();
        let total_pages = u32::try_from(self.pages.len()).unwrap_or(u32::MAX);
        let total = self.pages.iter().map(|records| records.len() as u64).sum();
        Ok(Page {
            page: page.get(),
            per_page: u32::try_from(data.len()).unwrap_or(u32::MAX),
            total,
            total_pages,
            data,
        })
    }
}
