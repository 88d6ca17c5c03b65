//! Page requests and page results.
//!
//! The total row count is the expensive part of a paginated search.
//! [`PageRequest::inferred_total`] decides when the content page alone already
//! proves the total so the count query can be skipped.

use serde::Serialize;
use thiserror::Error;

/// Rejected pagination input. Raised before any storage access.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page must not be negative, got {0}")]
    NegativePage(i64),
    #[error("page size must be greater than zero, got {0}")]
    NonPositiveSize(i64),
    #[error("page {page} with size {size} overflows the row offset")]
    OffsetOverflow { page: i64, size: i64 },
}

/// Zero-based page index plus page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
    offset: usize,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Result<Self, PaginationError> {
        if page < 0 {
            return Err(PaginationError::NegativePage(page));
        }
        if size <= 0 {
            return Err(PaginationError::NonPositiveSize(size));
        }
        // Storage takes the window as `i64`, so the offset must fit there too.
        let overflow = PaginationError::OffsetOverflow { page, size };
        let offset = page.checked_mul(size).ok_or(overflow.clone())?;

        Ok(Self {
            page: usize::try_from(page).map_err(|_| overflow.clone())?,
            size: usize::try_from(size).map_err(|_| overflow.clone())?,
            offset: usize::try_from(offset).map_err(|_| overflow)?,
        })
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of rows preceding this page.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Total row count implied by a fetched content page, if it is implied.
    ///
    /// A page shorter than `size` is the last one, so the total is
    /// `offset + content_len`. A full page says nothing about what follows.
    /// An empty page past the first row may sit beyond the end of the data,
    /// so that case also returns `None` and the caller counts.
    pub const fn inferred_total(&self, content_len: usize) -> Option<usize> {
        if content_len >= self.size {
            return None;
        }
        if content_len == 0 && self.offset > 0 {
            return None;
        }
        Some(self.offset + content_len)
    }
}

/// One page of `T` plus metadata describing the whole result set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    content: Vec<T>,
    page: usize,
    size: usize,
    total_elements: usize,
    total_pages: usize,
    is_last: bool,
    has_next: bool,
}

impl<T> Page<T> {
    /// Assembles a page from its content and the known total.
    ///
    /// `content` longer than the request is truncated to `size`. When rows were
    /// returned, a total lower than `offset + content.len()` is raised to it.
    pub fn new(mut content: Vec<T>, request: PageRequest, total: usize) -> Self {
        content.truncate(request.size);
        let seen = request.offset + content.len();
        let total_elements = if content.is_empty() {
            total
        } else {
            total.max(seen)
        };
        let is_last = seen >= total_elements;

        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages: total_elements.div_ceil(request.size),
            is_last,
            has_next: !is_last,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn total_elements(&self) -> usize {
        self.total_elements
    }

    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub const fn is_last(&self) -> bool {
        self.is_last
    }

    pub const fn has_next(&self) -> bool {
        self.has_next
    }
}
