//! Sequential aggregation of every page of the people directory.
//!
//! One aggregation run walks the listing from page 1, awaiting each page
//! before requesting the next, and concatenates the records in
//! page-ascending, within-page server order. Whether another page exists is
//! decided from the most recent envelope only, because the server may change
//! `total_pages` between calls.
//!
//! A failed page request ends the run immediately. Records gathered before
//! the failure are still delivered alongside the error.

use std::sync::Arc;

use pagination::PageNumber;
use tracing::{debug, warn};

use crate::domain::UserRecord;
use crate::domain::ports::{DirectoryClient, RemoteServiceError};

/// Progress of one aggregation run.
///
/// `Idle → Fetching(1) → Fetching(n + 1)… → Done | Failed`. At most one page
/// request is outstanding at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationState {
    /// No request issued yet.
    Idle,
    /// Waiting on the response for `page`.
    Fetching {
        /// Page currently being requested.
        page: PageNumber,
    },
    /// The last page reported by the server has been appended.
    Done,
    /// The request for `page` failed; no further pages were requested.
    Failed {
        /// Page whose request failed.
        page: PageNumber,
    },
}

impl AggregationState {
    /// Return whether the run has stopped.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed { .. })
    }
}

/// Result of one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryAggregate {
    /// Every record received, in page-ascending, within-page server order.
    pub users: Vec<UserRecord>,
    /// Number of pages fetched successfully.
    pub pages_fetched: u32,
    /// Terminal state of the run.
    pub final_state: AggregationState,
    /// The failure that stopped the run early, if any.
    pub failure: Option<RemoteServiceError>,
}

impl DirectoryAggregate {
    /// Return whether every page was fetched.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Walks every page of the directory through an injected [`DirectoryClient`].
///
/// Each call to [`DirectoryAggregator::aggregate`] is an independent run with
/// its own accumulator; nothing is shared between runs.
///
/// # Examples
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use mypeople::domain::DirectoryAggregator;
/// use mypeople::domain::ports::FixtureDirectoryClient;
///
/// # async fn demo() {
/// let aggregator = DirectoryAggregator::new(Arc::new(FixtureDirectoryClient::default()));
/// let aggregate = aggregator.aggregate().await;
/// assert!(aggregate.is_complete());
/// # }
/// ```
#[derive(Clone)]
pub struct DirectoryAggregator {
    client: Arc<dyn DirectoryClient>,
}

impl DirectoryAggregator {
    /// Build an aggregator around an explicitly constructed client.
    pub fn new(client: Arc<dyn DirectoryClient>) -> Self {
        Self { client }
    }

    /// Fetch every page and return the aggregated directory.
    ///
    /// Never fails outright: a page failure is reported through
    /// [`DirectoryAggregate::failure`] next to the records gathered so far.
    pub async fn aggregate(&self) -> DirectoryAggregate {
        let mut users = Vec::new();
        let mut pages_fetched = 0_u32;
        let mut failure = None;
        let mut state = AggregationState::Idle;

        while !state.is_terminal() {
            state = match state {
                AggregationState::Idle => AggregationState::Fetching {
                    page: PageNumber::first(),
                },
                AggregationState::Fetching { page } => match self.client.fetch_page(page).await {
                    Ok(envelope) => {
                        pages_fetched = pages_fetched.saturating_add(1);
                        let has_more = envelope.has_more_after(page);
                        debug!(
                            page = page.get(),
                            records = envelope.data.len(),
                            total_pages = envelope.total_pages,
                            "directory page fetched"
                        );
                        users.extend(envelope.data);
                        if has_more {
                            advance(page)
                        } else {
                            AggregationState::Done
                        }
                    }
                    Err(error) => {
                        warn!(
                            page = page.get(),
                            kind = error.kind(),
                            error = %error,
                            delivered = users.len(),
                            "directory page fetch failed; keeping records fetched so far"
                        );
                        failure = Some(error);
                        AggregationState::Failed { page }
                    }
                },
                terminal @ (AggregationState::Done | AggregationState::Failed { .. }) => terminal,
            };
        }

        DirectoryAggregate {
            users,
            pages_fetched,
            final_state: state,
            failure,
        }
    }

    /// Callback form of [`DirectoryAggregator::aggregate`].
    ///
    /// `on_complete` always receives the records, including a partial set
    /// when a page failed.
    pub async fn fetch_all_users<C>(&self, on_complete: C) -> AggregationState
    where
        C: FnOnce(Vec<UserRecord>),
    {
        self.fetch_all_users_or_else(on_complete, |_| {}).await
    }

    /// Callback form with a failure handler.
    ///
    /// When a page fails, `on_failure` runs exactly once, before
    /// `on_complete` receives the partial records. On success it never runs.
    pub async fn fetch_all_users_or_else<C, F>(
        &self,
        on_complete: C,
        on_failure: F,
    ) -> AggregationState
    where
        C: FnOnce(Vec<UserRecord>),
        F: FnOnce(&RemoteServiceError),
    {
        let aggregate = self.aggregate().await;
        if let Some(error) = aggregate.failure.as_ref() {
            on_failure(error);
        }
        on_complete(aggregate.users);
        aggregate.final_state
    }
}

fn advance(page: PageNumber) -> AggregationState {
    match page.next() {
        Ok(next) => AggregationState::Fetching { page: next },
        Err(error) => {
            warn!(error = %error, "directory reports more pages than can be addressed");
            AggregationState::Done
        }
    }
}

#[cfg(test)]
#[path = "directory_aggregator_tests.rs"]
mod tests;
