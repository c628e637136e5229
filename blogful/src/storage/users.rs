use log::debug;
use sqlx::{FromRow, SqliteConnection};
use crate::data::{User, UserId};
use crate::storage::errors::StorageError;

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl From<UserRow> for UserCredentials {
    fn from(row: UserRow) -> Self {
        UserCredentials {
            user: User {
                id: UserId(row.id),
                name: row.name,
                email: row.email,
            },
            password_hash: row.password_hash,
        }
    }
}

pub struct UserStorage<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> UserStorage<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        UserStorage { conn }
    }

    pub async fn get_user(
        &mut self,
        id: UserId,
    ) -> Result<Option<User>, StorageError> {
        Ok(
            sqlx::query_as::<_, UserRow>(
                "SELECT id, name, email, password_hash FROM users WHERE id = ?",
            )
                .bind(id.0)
                .fetch_optional(&mut *self.conn)
                .await?
                .map(|row| UserCredentials::from(row).user)
        )
    }

    pub async fn find_credentials_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<UserCredentials>, StorageError> {
        Ok(
            sqlx::query_as::<_, UserRow>(
                "SELECT id, name, email, password_hash FROM users
                    WHERE email = ?",
            )
                .bind(email)
                .fetch_optional(&mut *self.conn)
                .await?
                .map(UserCredentials::from)
        )
    }

    pub async fn create_user(
        &mut self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserId, StorageError> {
        let result = sqlx::query(
            "INSERT INTO users (name, email, password_hash) VALUES (?, ?, ?)",
        )
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .execute(&mut *self.conn)
            .await;
        match result {
            Ok(result) => {
                let id = result.last_insert_rowid();
                debug!("created user {id} with email \"{email}\"");
                Ok(UserId(id))
            },
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() =>
                Err(StorageError::EmailTaken),
            Err(e) => Err(e.into()),
        }
    }
}
