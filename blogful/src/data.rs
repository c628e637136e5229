use std::fmt;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub i64);

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// `created_at` never changes after the entry is stored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    pub created_at: OffsetDateTime,
    pub author_id: Option<UserId>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    pub author_id: UserId,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryUpdate {
    pub title: String,
    pub content: String,
}

/// A user as seen by the rest of the application; the password hash
/// stays inside the user db.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}
