use log::debug;
use sqlx::SqliteConnection;
use crate::storage::errors::StorageError;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS entries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL CHECK (length(title) <= 1024),
        content TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        author_id INTEGER REFERENCES users(id)
    )",
    "CREATE INDEX IF NOT EXISTS entries_created_at
        ON entries (created_at DESC, id DESC)",
];

/// Idempotent, safe to run on every startup.
pub async fn apply_schema(
    conn: &mut SqliteConnection,
) -> Result<(), StorageError> {
    debug!("applying database schema");
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *conn).await?;
    }
    Ok(())
}
