use thiserror::Error;
use time::error::ComponentRange;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("entry not found")]
    EntryNotFound,

    #[error("entry title is longer than 1024 characters")]
    TitleTooLong,

    #[error("a user with this email already exists")]
    EmailTaken,

    #[error("cannot interpret timestamp")]
    Timestamp(#[from] ComponentRange),

    #[error("value out of the range the database can store")]
    OutOfRange,
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::EntryNotFound)
    }
}
