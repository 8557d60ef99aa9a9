//! User-list use-case: load the full directory once, then search it locally.

use std::sync::Arc;

use super::directory_aggregator::DirectoryAggregator;
use super::ports::{Notifier, RemoteServiceError};
use super::{DirectorySearch, Notice, UserRecord};

/// Summary of one [`UserList::load`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records now held by the list.
    pub records: usize,
    /// Pages fetched successfully.
    pub pages_fetched: u32,
    /// Failure that cut the load short, if any.
    pub failure: Option<RemoteServiceError>,
}

/// Holds the most recently aggregated directory for display and search.
///
/// A load failure raises one notice but never clears the view: whatever was
/// fetched before the failure is kept and shown.
pub struct UserList {
    aggregator: DirectoryAggregator,
    notifier: Arc<dyn Notifier>,
    users: Vec<UserRecord>,
}

impl UserList {
    /// Build an empty list backed by `aggregator`.
    pub fn new(aggregator: DirectoryAggregator, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            aggregator,
            notifier,
            users: Vec::new(),
        }
    }

    /// Run one aggregation and replace the held directory with its records.
    pub async fn load(&mut self) -> LoadSummary {
        let aggregate = self.aggregator.aggregate().await;
        if let Some(error) = aggregate.failure.as_ref() {
            self.notifier.notify(&Notice::for_directory_failure(error));
        }
        self.users = aggregate.users;
        LoadSummary {
            records: self.users.len(),
            pages_fetched: aggregate.pages_fetched,
            failure: aggregate.failure,
        }
    }

    /// Every held record, in aggregated order.
    pub fn users(&self) -> &[UserRecord] {
        self.users.as_slice()
    }

    /// Records matching `query`; an empty query returns everything.
    pub fn visible(&self, query: &str) -> Vec<&UserRecord> {
        DirectorySearch::new(query).filter(&self.users)
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for loading, notifying, and searching the list.
    use super::*;
    use crate::domain::UserRecordId;
    use crate::domain::ports::{MockDirectoryClient, MockNotifier};
    use mockall::Sequence;
    use mockall::predicate::eq;
    use pagination::Page;

    fn user(id: u64, first: &str, last: &str) -> UserRecord {
        UserRecord::new(
            UserRecordId::new(id),
            first,
            last,
            format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
            "",
        )
    }

    fn envelope(number: u32, total_pages: u32, data: Vec<UserRecord>) -> Page<UserRecord> {
        Page {
            page: number,
            per_page: 2,
            total: 4,
            total_pages,
            data,
        }
    }

    #[tokio::test]
    async fn partial_load_notifies_once_and_keeps_records() {
        let mut client = MockDirectoryClient::new();
        let mut sequence = Sequence::new();
        client
            .expect_fetch_page()
            .times(1)
            .in_sequence(&mut sequence)
            .return_once(|_| {
                Ok(envelope(
                    1,
                    2,
                    vec![user(1, "George", "Bluth"), user(2, "Janet", "Weaver")],
                ))
            });
        client
            .expect_fetch_page()
            .times(1)
            .in_sequence(&mut sequence)
            .return_once(|_| Err(RemoteServiceError::connection_failed("unreachable")));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(Notice::DirectoryConnectionFailed {
                cause: "unreachable".to_owned(),
            }))
            .times(1)
            .return_const(());

        let mut list = UserList::new(
            DirectoryAggregator::new(Arc::new(client)),
            Arc::new(notifier),
        );
        let summary = list.load().await;

        assert_eq!(summary.records, 2);
        assert_eq!(summary.pages_fetched, 1);
        assert!(summary.failure.is_some());
        assert_eq!(list.users().len(), 2);
    }

    #[tokio::test]
    async fn reload_replaces_previous_records_and_search_filters_them() {
        let mut client = MockDirectoryClient::new();
        let mut sequence = Sequence::new();
        client
            .expect_fetch_page()
            .times(1)
            .in_sequence(&mut sequence)
            .return_once(|_| Ok(envelope(1, 1, vec![user(1, "George", "Bluth")])));
        client
            .expect_fetch_page()
            .times(1)
            .in_sequence(&mut sequence)
            .return_once(|_| {
                Ok(envelope(
                    1,
                    1,
                    vec![user(2, "Janet", "Weaver"), user(3, "Emma", "Wong")],
                ))
            });
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(0);

        let mut list = UserList::new(
            DirectoryAggregator::new(Arc::new(client)),
            Arc::new(notifier),
        );
        list.load().await;
        let summary = list.load().await;

        assert_eq!(summary.records, 2);
        assert_eq!(list.visible("").len(), 2);
        let hits: Vec<u64> = list
            .visible("WONG")
            .into_iter()
            .map(|record| record.id().get())
            .collect();
        assert_eq!(hits, vec![3]);
    }
}
