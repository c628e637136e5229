use log::warn;
use thiserror::Error;
use crate::data::{Entry, User};

/// Only the owner of an entry may change it. Entries without an owner
/// can't be changed by anyone.
pub fn may_modify(entry: &Entry, user: Option<&User>) -> bool {
    match (entry.author_id, user) {
        (Some(author_id), Some(user)) => author_id == user.id,
        _ => false,
    }
}

pub fn authorize_modification(
    entry: &Entry,
    user: Option<&User>,
) -> Result<(), AuthorizationError> {
    if may_modify(entry, user) {
        Ok(())
    } else {
        warn!(
            "denied modification of entry {} to {}",
            entry.id,
            user.map_or_else(
                || "an anonymous user".to_string(),
                |u| format!("user {}", u.id),
            ),
        );
        Err(AuthorizationError::Forbidden)
    }
}

#[derive(Debug, Eq, Error, PartialEq)]
pub enum AuthorizationError {
    #[error("not allowed to modify this entry")]
    Forbidden,
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;
    use crate::data::{EntryId, UserId};
    use super::*;

    fn entry(author_id: Option<i64>) -> Entry {
        Entry {
            id: EntryId(1),
            title: "title".to_string(),
            content: "content".to_string(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            author_id: author_id.map(UserId),
        }
    }

    fn user(id: i64) -> User {
        User {
            id: UserId(id),
            name: format!("user{id}"),
            email: format!("user{id}@example.com"),
        }
    }

    #[test]
    fn owner_may_modify() {
        assert!(may_modify(&entry(Some(1)), Some(&user(1))));
        assert_eq!(authorize_modification(&entry(Some(1)), Some(&user(1))), Ok(()));
    }

    #[test]
    fn other_user_is_forbidden() {
        assert!(!may_modify(&entry(Some(1)), Some(&user(2))));
        assert_eq!(
            authorize_modification(&entry(Some(1)), Some(&user(2))),
            Err(AuthorizationError::Forbidden),
        );
    }

    #[test]
    fn anonymous_is_forbidden() {
        assert!(!may_modify(&entry(Some(1)), None));
        assert!(!may_modify(&entry(None), None));
    }

    #[test]
    fn ownerless_entry_is_forbidden_to_everyone() {
        for id in 1..5 {
            assert_eq!(
                authorize_modification(&entry(None), Some(&user(id))),
                Err(AuthorizationError::Forbidden),
            );
        }
    }
}
