
use std::sync::Arc;
use argon2::PasswordHash;
use async_trait::async_trait;
use log::{debug, trace};
use sqlx::SqliteConnection;
use thiserror::Error;
use tokio::task::{spawn_blocking, JoinError};
use crate::data::{User, UserId};
use crate::hasher::{Hasher, HasherError, ProductionHasher};
use crate::storage::errors::StorageError;
use crate::storage::UserStorage;

/// Users with their credentials. Hashing runs off the async workers.
#[async_trait]
pub trait UserDb: Send + Sync {
    /// `None` both for an unknown email and for a wrong password.
    async fn check_user_credentials(
        &self,
        conn: &mut SqliteConnection,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, UserDbError>;

    async fn add_user(
        &self,
        conn: &mut SqliteConnection,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserId, UserDbError>;
}

pub struct UserDbImpl<H: Hasher + 'static> {
    hasher: Arc<H>,
}

impl<H: Hasher + 'static> UserDbImpl<H> {
    pub fn new(hasher: H) -> Self {
        UserDbImpl {
            hasher: Arc::new(hasher),
        }
    }
}

pub type ProductionUserDb = UserDbImpl<ProductionHasher>;

#[async_trait]
impl<H: Hasher + 'static> UserDb for UserDbImpl<H> {
    async fn check_user_credentials(
        &self,
        conn: &mut SqliteConnection,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, UserDbError> {
        trace!("checking credentials for \"{email}\"");
        let credentials = UserStorage::new(conn)
            .find_credentials_by_email(email)
            .await?;
        let Some(credentials) = credentials else {
            trace!("no user with email \"{email}\"");
            return Ok(None);
        };
        let hasher = self.hasher.clone();
        let password = password.to_string();
        let password_hash = credentials.password_hash;
        let is_valid = spawn_blocking(move || {
            let hash = PasswordHash::new(&password_hash)
                .map_err(|e| HasherError::Hash(Box::new(e)))?;
            hasher.check_hash(hash, &password)
        }).await??;
        if is_valid {
            trace!("user \"{email}\" correctly authenticated");
            Ok(Some(credentials.user))
        } else {
            trace!("user \"{email}\" not authenticated");
            Ok(None)
        }
    }

    async fn add_user(
        &self,
        conn: &mut SqliteConnection,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserId, UserDbError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();
        let hash = spawn_blocking(move || hasher.generate_hash(&password))
            .await??;
        let id = UserStorage::new(conn)
            .create_user(name, email, &hash)
            .await?;
        debug!("added user {id} \"{email}\"");
        Ok(id)
    }
}

#[derive(Debug, Error)]
pub enum UserDbError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("hashing failed: {0}")]
    Hashing(#[from] HasherError),

    #[error("hashing task failed: {0}")]
    Task(#[from] JoinError),
}
