//! Page-number pagination metadata and request parameters.

use serde::{Deserialize, Serialize};

/// Page size applied when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size a caller may request; larger values are clamped.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Errors raised when pagination parameters are out of range.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    /// Pages are numbered from one.
    #[error("page must be at least 1")]
    ZeroPage,
    /// A page must hold at least one item.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Pagination metadata attached to list envelopes.
///
/// ## Invariants
/// - `page >= 1` and `page_size >= 1`.
/// - `total_pages == ceil(total_items / page_size)`; an empty collection has
///   zero pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    page: u32,
    page_size: u32,
    total_items: u64,
    total_pages: u64,
}

impl Pagination {
    /// Build metadata for `page` of a collection holding `total_items`.
    ///
    /// # Examples
    /// ```
    /// use envelope::Pagination;
    ///
    /// let meta = Pagination::try_new(2, 10, 25).expect("valid pagination");
    /// assert_eq!(meta.total_pages(), 3);
    /// ```
    pub fn try_new(page: u32, page_size: u32, total_items: u64) -> Result<Self, PaginationError> {
        if page == 0 {
            return Err(PaginationError::ZeroPage);
        }
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(Self {
            page,
            page_size,
            total_items,
            total_pages: total_items.div_ceil(u64::from(page_size)),
        })
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of items per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of items across all pages.
    #[must_use]
    pub const fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Number of pages needed to hold every item.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }
}

const fn default_page() -> u32 {
    1
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Page selection supplied by a caller, typically from the query string
/// (`?page=2&pageSize=10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_page_size")]
    page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PageRequest {
    /// Validate a page selection, clamping the page size to
    /// [`MAX_PAGE_SIZE`].
    pub fn new(page: u32, page_size: u32) -> Result<Self, PaginationError> {
        Self { page, page_size }.normalised()
    }

    /// Re-apply the constructor rules to a value obtained through serde.
    pub fn normalised(self) -> Result<Self, PaginationError> {
        if self.page == 0 {
            return Err(PaginationError::ZeroPage);
        }
        if self.page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(Self {
            page: self.page,
            page_size: self.page_size.min(MAX_PAGE_SIZE),
        })
    }

    /// Requested one-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Cut the requested page out of an in-memory collection.
    ///
    /// Pages past the end yield no items but still report accurate totals.
    ///
    /// # Examples
    /// ```
    /// use envelope::PageRequest;
    ///
    /// let request = PageRequest::new(2, 2).expect("valid request");
    /// let (items, meta) = request.slice(&[1, 2, 3]).expect("valid slice");
    /// assert_eq!(items, vec![3]);
    /// assert_eq!(meta.total_pages(), 2);
    /// ```
    pub fn slice<T: Clone>(&self, items: &[T]) -> Result<(Vec<T>, Pagination), PaginationError> {
        let request = self.normalised()?;
        let total_items = u64::try_from(items.len()).unwrap_or(u64::MAX);
        let meta = Pagination::try_new(request.page, request.page_size, total_items)?;

        let size = usize::try_from(request.page_size).unwrap_or(usize::MAX);
        let offset = usize::try_from(request.page - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(size);
        let page = items.iter().skip(offset).take(size).cloned().collect();
        Ok((page, meta))
    }
}
