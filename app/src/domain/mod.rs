//! Domain primitives, use-cases, and ports.
//!
//! Purpose: model the people directory client independently of HTTP and of
//! any particular front end. Adapters plug in through [`ports`].
//!
//! Public surface:
//! - LoginCredentials / SessionToken: one login attempt and its result.
//! - UserRecord: one directory entry.
//! - DirectorySearch: case-insensitive filter over aggregated records.
//! - DirectoryAggregator: sequential walk over every directory page.
//! - LoginFlow / UserList: the two screen-level use-cases.
//! - Notice: user-visible messages raised by those use-cases.

pub mod auth;
pub mod directory_aggregator;
pub mod login_flow;
pub mod notice;
pub mod ports;
pub mod search;
pub mod user;
pub mod user_list;

pub use self::auth::{LoginCredentials, LoginValidationError, SessionToken};
pub use self::directory_aggregator::{AggregationState, DirectoryAggregate, DirectoryAggregator};
pub use self::login_flow::{LoginFlow, LoginFlowError};
pub use self::notice::Notice;
pub use self::search::DirectorySearch;
pub use self::user::{UserRecord, UserRecordId};
pub use self::user_list::{LoadSummary, UserList};
