use std::ops::{Deref, DerefMut};
use async_trait::async_trait;
use log::error;
use rocket::http::Status;
use rocket::outcome::try_outcome;
use rocket::request::{FromRequest, Outcome};
use rocket::{Request, State};
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};

/// A pooled connection held for the duration of a request.
pub struct DbConnection(PoolConnection<Sqlite>);

#[async_trait]
impl<'r> FromRequest<'r> for DbConnection {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let pool = try_outcome!(request.guard::<&State<SqlitePool>>().await);
        match pool.acquire().await {
            Ok(conn) => Outcome::Success(DbConnection(conn)),
            Err(e) => {
                error!("failed to get a database connection: {e}");
                Outcome::Error((Status::ServiceUnavailable, ()))
            },
        }
    }
}

impl Deref for DbConnection {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
