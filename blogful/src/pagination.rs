//! Page windows over the newest-first entry sequence.
//!
//! Pages are 1-indexed. A page past the last one is not an error: it yields
//! an empty window with `has_prev` set, just like any other page.

#[cfg(test)] mod tests;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    pub fn new(
        page: u64,
        page_size: u64,
        max_page_size: u64,
    ) -> Result<Self, PaginationError> {
        if page == 0 {
            return Err(PaginationError::InvalidPage);
        }
        if page_size == 0 || page_size > max_page_size {
            return Err(PaginationError::InvalidPageSize {
                page_size,
                max_page_size,
            });
        }
        Ok(PageRequest { page, page_size })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageWindow {
    pub page: u64,
    pub page_size: u64,
    /// Index of the first entry of the page, inclusive.
    pub start: u64,
    /// Index past the last entry of the page.
    pub end: u64,
    /// Zero when there are no entries at all.
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageWindow {
    pub fn compute(
        request: PageRequest,
        total: u64,
    ) -> Result<Self, PaginationError> {
        let page_index = request.page - 1;
        let start = page_index
            .checked_mul(request.page_size)
            .ok_or(PaginationError::PageOutOfRange)?;
        let end = start
            .checked_add(request.page_size)
            .filter(|end| *end <= i64::MAX as u64)
            .ok_or(PaginationError::PageOutOfRange)?;
        let total_pages = if total == 0 {
            0
        } else {
            (total - 1) / request.page_size + 1
        };
        Ok(
            PageWindow {
                page: request.page,
                page_size: request.page_size,
                start,
                end,
                total_pages,
                has_next: page_index + 1 < total_pages,
                has_prev: page_index > 0,
            }
        )
    }
}

#[derive(Debug, Eq, Error, PartialEq)]
pub enum PaginationError {
    #[error("pages are numbered from 1")]
    InvalidPage,

    #[error("page size must be between 1 and {max_page_size}, got {page_size}")]
    InvalidPageSize {
        page_size: u64,
        max_page_size: u64,
    },

    #[error("page is out of the addressable range")]
    PageOutOfRange,
}
