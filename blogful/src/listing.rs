
use async_trait::async_trait;
use log::debug;
use thiserror::Error;
use crate::data::Entry;
use crate::pagination::{PageRequest, PageWindow, PaginationError};
use crate::storage::EntryStorage;
use crate::storage::errors::StorageError;

/// The queries page listing needs from the store.
#[async_trait]
pub trait EntrySource: Send {
    async fn count_entries(&mut self) -> Result<u64, StorageError>;

    /// Newest first.
    async fn fetch_entries(
        &mut self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Entry>, StorageError>;
}

#[async_trait]
impl<'c> EntrySource for EntryStorage<'c> {
    async fn count_entries(&mut self) -> Result<u64, StorageError> {
        EntryStorage::count_entries(self).await
    }

    async fn fetch_entries(
        &mut self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Entry>, StorageError> {
        self.list_entries(offset, limit).await
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryPage {
    pub entries: Vec<Entry>,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

pub async fn list_page(
    source: &mut impl EntrySource,
    request: PageRequest,
) -> Result<EntryPage, ListingError> {
    let total = source.count_entries().await?;
    let window = PageWindow::compute(request, total)?;
    debug!(
        "listing page {} of {} ({total} entries in total)",
        window.page,
        window.total_pages,
    );
    let entries = source.fetch_entries(window.start, window.page_size).await?;
    Ok(
        EntryPage {
            entries,
            page: window.page,
            page_size: window.page_size,
            total_pages: window.total_pages,
            has_next: window.has_next,
            has_prev: window.has_prev,
        }
    )
}

#[derive(Debug, Error)]
pub enum ListingError {
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
