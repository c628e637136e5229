use async_trait::async_trait;
use blogful::data::{User, UserId};
use blogful::storage::UserStorage;
use log::{error, warn};
use rocket::http::Status;
use rocket::outcome::try_outcome;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use crate::app_constants::SESSION_COOKIE;
use crate::db::DbConnection;

/// The logged in user, if there is one.
#[derive(Debug)]
pub struct MaybeUser(pub Option<User>);

/// Fails with 401 for anonymous requests.
#[derive(Debug)]
pub struct CurrentUser(pub User);

#[async_trait]
impl<'r> FromRequest<'r> for MaybeUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(cookie) = request.cookies().get_private(SESSION_COOKIE) else {
            return Outcome::Success(MaybeUser(None));
        };
        let Ok(id) = cookie.value().parse::<i64>() else {
            warn!("malformed session cookie");
            return Outcome::Success(MaybeUser(None));
        };
        let mut conn = try_outcome!(request.guard::<DbConnection>().await);
        match UserStorage::new(&mut conn).get_user(UserId(id)).await {
            Ok(user) => Outcome::Success(MaybeUser(user)),
            Err(e) => {
                error!("failed to load user {id}: {e}");
                Outcome::Error((Status::InternalServerError, ()))
            },
        }
    }
}

#[async_trait]
impl<'r> FromRequest<'r> for CurrentUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match try_outcome!(request.guard::<MaybeUser>().await) {
            MaybeUser(Some(user)) => Outcome::Success(CurrentUser(user)),
            MaybeUser(None) => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}
