use blogful::authorization::AuthorizationError;
use blogful::listing::ListingError;
use blogful::pagination::PaginationError;
use blogful::rendering::FormattingError;
use blogful::storage::errors::StorageError;
use blogful::user_db::UserDbError;
use log::{debug, error};
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::Request;
use thiserror::Error;

/// Handler failures. Responding hands the status over to the catchers.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    #[error(transparent)]
    UserDb(#[from] UserDbError),

    #[error("template rendering failed: {0}")]
    Template(#[from] tera::Error),

    #[error(transparent)]
    Formatting(#[from] FormattingError),
}

impl From<sqlx::Error> for RouteError {
    fn from(e: sqlx::Error) -> Self {
        RouteError::Storage(e.into())
    }
}

impl RouteError {
    pub fn status(&self) -> Status {
        match self {
            RouteError::Listing(ListingError::Pagination(e)) => match e {
                PaginationError::InvalidPage
                | PaginationError::PageOutOfRange => Status::NotFound,
                PaginationError::InvalidPageSize { .. } => Status::BadRequest,
            },
            RouteError::Listing(ListingError::Storage(e))
            | RouteError::Storage(e)
            | RouteError::UserDb(UserDbError::Storage(e)) => match e {
                StorageError::EntryNotFound => Status::NotFound,
                StorageError::TitleTooLong => Status::BadRequest,
                _ => Status::InternalServerError,
            },
            RouteError::Authorization(AuthorizationError::Forbidden) =>
                Status::Forbidden,
            RouteError::UserDb(_)
            | RouteError::Template(_)
            | RouteError::Formatting(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for RouteError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status == Status::InternalServerError {
            error!("request failed: {self}");
        } else {
            debug!("request failed with {status}: {self}");
        }
        Err(status)
    }
}
