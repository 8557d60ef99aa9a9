//! Directory user records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecordId(u64);

impl UserRecordId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserRecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One entry of the remote people directory.
///
/// Records are immutable once received; accessors hand out borrowed views.
///
/// # Examples
/// ```
/// use mypeople::domain::{UserRecord, UserRecordId};
///
/// let user = UserRecord::new(
///     UserRecordId::new(7),
///     "Michael",
///     "Lawson",
///     "michael.lawson@reqres.in",
///     "https://reqres.in/img/faces/7-image.jpg",
/// );
/// assert_eq!(user.display_name(), "Michael Lawson");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    id: UserRecordId,
    first_name: String,
    last_name: String,
    email: String,
    avatar: String,
}

impl UserRecord {
    /// Build a record from its parts.
    pub fn new(
        id: UserRecordId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            avatar: avatar.into(),
        }
    }

    /// Server-assigned identifier.
    pub fn id(&self) -> UserRecordId {
        self.id
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Contact email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Avatar image URI, as reported by the server.
    pub fn avatar(&self) -> &str {
        self.avatar.as_str()
    }

    /// "First Last", as shown in list rows.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
