//! Case-insensitive search over an aggregated directory.

use super::UserRecord;

/// Search query typed into the user list.
///
/// A record matches when its first name, last name, or email contains the
/// query, ignoring case character by character. The query is used exactly as
/// typed; an empty query matches every record.
///
/// # Examples
/// ```
/// use mypeople::domain::{DirectorySearch, UserRecord, UserRecordId};
///
/// let users = vec![
///     UserRecord::new(UserRecordId::new(1), "George", "Bluth", "george.bluth@reqres.in", ""),
///     UserRecord::new(UserRecordId::new(2), "Janet", "Weaver", "janet.weaver@reqres.in", ""),
/// ];
/// let hits = DirectorySearch::new("WEAV").filter(&users);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].first_name(), "Janet");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectorySearch {
    needle: Vec<char>,
}

impl DirectorySearch {
    /// Prepare a query for repeated matching.
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.chars().collect(),
        }
    }

    /// Return whether the query is empty and therefore matches everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Return whether `user` matches the query.
    pub fn matches(&self, user: &UserRecord) -> bool {
        if self.is_empty() {
            return true;
        }
        [user.first_name(), user.last_name(), user.email()]
            .into_iter()
            .any(|field| self.found_in(field))
    }

    fn found_in(&self, field: &str) -> bool {
        let haystack: Vec<char> = field.chars().collect();
        haystack.windows(self.needle.len()).any(|window| {
            window
                .iter()
                .zip(&self.needle)
                .all(|(&left, &right)| chars_match(left, right))
        })
    }

    /// Return the matching records in their aggregated order.
    pub fn filter<'a>(&self, users: &'a [UserRecord]) -> Vec<&'a UserRecord> {
        users.iter().filter(|user| self.matches(user)).collect()
    }
}

/// Compare two characters the way a case-insensitive region match does:
/// equal as typed, equal once upper-cased, or equal once lower-cased from
/// their upper-case forms. Only single-character mappings are applied.
fn chars_match(left: char, right: char) -> bool {
    if left == right {
        return true;
    }
    let (left, right) = (simple_upper(left), simple_upper(right));
    left == right || simple_lower(left) == simple_lower(right)
}

fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

fn simple_lower(c: char) -> char {
    // U+0130 is the only character with a multi-character lowercase form; its
    // single-character mapping is the leading 'i'.
    c.to_lowercase().next().unwrap_or(c)
}
