use std::str::FromStr;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqliteConnection, SqlitePool};
use crate::config::app_config::DatabaseConfig;

pub mod errors;
pub mod schema;
mod entries;
mod users;

pub use entries::EntryStorage;
pub use users::{UserCredentials, UserStorage};
use errors::StorageError;

fn connect_options(
    config: &DatabaseConfig,
) -> Result<SqliteConnectOptions, StorageError> {
    Ok(
        SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true)
    )
}

pub async fn create_pool(
    config: &DatabaseConfig,
) -> Result<SqlitePool, StorageError> {
    info!(
        "opening database {} with up to {} connections",
        config.url,
        config.max_connections,
    );
    Ok(
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(connect_options(config)?)
            .await?
    )
}

/// A single connection, for tools that don't need a pool.
pub async fn connect(
    config: &DatabaseConfig,
) -> Result<SqliteConnection, StorageError> {
    Ok(connect_options(config)?.connect().await?)
}
