use log::{debug, trace};
use sqlx::{FromRow, SqliteConnection};
use time::OffsetDateTime;
use crate::data::{Entry, EntryId, EntryUpdate, NewEntry, UserId};
use crate::storage::errors::StorageError;

#[derive(FromRow)]
struct EntryRow {
    id: i64,
    title: String,
    content: String,
    created_at: i64,
    author_id: Option<i64>,
}

impl TryFrom<EntryRow> for Entry {
    type Error = StorageError;

    fn try_from(row: EntryRow) -> Result<Self, Self::Error> {
        Ok(
            Entry {
                id: EntryId(row.id),
                title: row.title,
                content: row.content,
                created_at: OffsetDateTime::from_unix_timestamp_nanos(
                    row.created_at as i128,
                )?,
                author_id: row.author_id.map(UserId),
            }
        )
    }
}

/// Entry queries over a single connection, or a transaction
/// dereferenced to one.
pub struct EntryStorage<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> EntryStorage<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        EntryStorage { conn }
    }

    pub async fn count_entries(&mut self) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries")
            .fetch_one(&mut *self.conn)
            .await?;
        trace!("counted {count} entries");
        u64::try_from(count).map_err(|_| StorageError::OutOfRange)
    }

    /// Newest first; entries created at the same instant come
    /// in reverse insertion order.
    pub async fn list_entries(
        &mut self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Entry>, StorageError> {
        debug!("listing entries from {offset}, at most {limit}");
        let offset = i64::try_from(offset)
            .map_err(|_| StorageError::OutOfRange)?;
        let limit = i64::try_from(limit)
            .map_err(|_| StorageError::OutOfRange)?;
        sqlx::query_as::<_, EntryRow>(
            "SELECT id, title, content, created_at, author_id FROM entries
                ORDER BY created_at DESC, id DESC
                LIMIT ? OFFSET ?",
        )
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *self.conn)
            .await?
            .into_iter()
            .map(Entry::try_from)
            .collect()
    }

    pub async fn get_entry(
        &mut self,
        id: EntryId,
    ) -> Result<Entry, StorageError> {
        debug!("reading entry {id}");
        sqlx::query_as::<_, EntryRow>(
            "SELECT id, title, content, created_at, author_id FROM entries
                WHERE id = ?",
        )
            .bind(id.0)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or(StorageError::EntryNotFound)
            .and_then(Entry::try_from)
    }

    pub async fn create_entry(
        &mut self,
        entry: &NewEntry,
        created_at: OffsetDateTime,
    ) -> Result<EntryId, StorageError> {
        let created_at = i64::try_from(created_at.unix_timestamp_nanos())
            .map_err(|_| StorageError::OutOfRange)?;
        let id = sqlx::query(
            "INSERT INTO entries (title, content, created_at, author_id)
                VALUES (?, ?, ?, ?)",
        )
            .bind(&entry.title)
            .bind(&entry.content)
            .bind(created_at)
            .bind(entry.author_id.0)
            .execute(&mut *self.conn)
            .await
            .map_err(map_entry_error)?
            .last_insert_rowid();
        debug!("created entry {id} for user {}", entry.author_id);
        Ok(EntryId(id))
    }

    /// Leaves the owner and the creation time as they are.
    pub async fn update_entry(
        &mut self,
        id: EntryId,
        update: &EntryUpdate,
    ) -> Result<(), StorageError> {
        debug!("updating entry {id}");
        let affected = sqlx::query(
            "UPDATE entries SET title = ?, content = ? WHERE id = ?",
        )
            .bind(&update.title)
            .bind(&update.content)
            .bind(id.0)
            .execute(&mut *self.conn)
            .await
            .map_err(map_entry_error)?
            .rows_affected();
        if affected == 0 {
            return Err(StorageError::EntryNotFound);
        }
        Ok(())
    }

    pub async fn delete_entry(
        &mut self,
        id: EntryId,
    ) -> Result<(), StorageError> {
        debug!("deleting entry {id}");
        let affected = sqlx::query("DELETE FROM entries WHERE id = ?")
            .bind(id.0)
            .execute(&mut *self.conn)
            .await?
            .rows_affected();
        if affected == 0 {
            return Err(StorageError::EntryNotFound);
        }
        Ok(())
    }
}

// The only check constraint on entries is the title length.
fn map_entry_error(e: sqlx::Error) -> StorageError {
    match e {
        sqlx::Error::Database(e) if e.is_check_violation() =>
            StorageError::TitleTooLong,
        e => e.into(),
    }
}
