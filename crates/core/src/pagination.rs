//! Client-side pagination over an in-memory record list.
//!
//! Pages are 1-based. `total_pages` is always derived from the item count and
//! the page size; it is never stored.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::error::{PaginationError, Result};

/// Records visible on one page, borrowed from the engine.
#[derive(Debug, Serialize)]
pub struct PageSlice<'a, T> {
    pub records: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_items: usize,
}

// Derived Clone/Copy would require `T: Clone`.
impl<T> Clone for PageSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PageSlice<'_, T> {}

impl<'a, T> PageSlice<'a, T> {
    /// Whether a "previous" control should be enabled.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.total_pages > 0 && self.page > 1
    }

    /// Whether a "next" control should be enabled.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// One entry per page link, `1..=total_pages`.
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Detach the slice from the engine so it can outlive a lock guard.
    #[must_use]
    pub fn to_owned_page(&self) -> Page<T>
    where
        T: Clone,
    {
        Page {
            records: self.records.to_vec(),
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_items: self.total_items,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
        }
    }
}

/// Owned page with the metadata a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Page<T> {
    /// Records on this page, in load order.
    pub records: Vec<T>,
    /// Current page, 1-based.
    pub page: usize,
    pub page_size: usize,
    /// 0 when the collection is empty.
    pub total_pages: usize,
    pub total_items: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }
}

/// Owns the loaded records and the current page position.
///
/// Invariant: `1 <= current_page <= total_pages()` whenever `items` is
/// non-empty. With no items `total_pages()` is 0 and `current_page` rests at 1.
#[derive(Debug, Clone)]
pub struct PaginationEngine<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
}

impl<T> Default for PaginationEngine<T> {
    fn default() -> Self {
        Self { items: Vec::new(), page_size: DEFAULT_PAGE_SIZE, current_page: 1 }
    }
}

impl<T> PaginationEngine<T> {
    /// Creates an empty engine.
    ///
    /// # Errors
    /// Returns [`PaginationError::InvalidPageSize`] when `page_size` is 0.
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize(page_size));
        }
        Ok(Self { items: Vec::new(), page_size, current_page: 1 })
    }

    /// Replaces all records and resets to page 1.
    pub fn load(&mut self, records: Vec<T>) {
        self.items = records;
        self.current_page = 1;
        tracing::debug!(
            items = self.items.len(),
            total_pages = self.total_pages(),
            "pagination: records loaded"
        );
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The slice for the current page without changing state.
    #[must_use]
    pub fn current(&self) -> PageSlice<'_, T> {
        self.slice(self.current_page)
    }

    /// Moves to `page` and returns its records.
    ///
    /// # Errors
    /// Returns [`PaginationError::OutOfRange`] unless `1 <= page <= total_pages()`;
    /// the current page is left unchanged.
    pub fn go_to_page(&mut self, page: usize) -> Result<PageSlice<'_, T>> {
        let total_pages = self.total_pages();
        if page < 1 || page > total_pages {
            tracing::warn!(page, total_pages, "pagination: page request out of range");
            return Err(PaginationError::OutOfRange { page, total_pages });
        }
        self.current_page = page;
        Ok(self.slice(page))
    }

    /// # Errors
    /// Returns [`PaginationError::OutOfRange`] when already on the last page.
    pub fn next_page(&mut self) -> Result<PageSlice<'_, T>> {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    /// # Errors
    /// Returns [`PaginationError::OutOfRange`] when already on page 1.
    pub fn previous_page(&mut self) -> Result<PageSlice<'_, T>> {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Changes the page size, clamping the current page to the new page count.
    ///
    /// # Errors
    /// Returns [`PaginationError::InvalidPageSize`] when `size` is 0; nothing is
    /// changed in that case.
    pub fn set_page_size(&mut self, size: usize) -> Result<PageSlice<'_, T>> {
        if size == 0 {
            tracing::warn!(size, "pagination: rejected page size");
            return Err(PaginationError::InvalidPageSize(size));
        }
        self.page_size = size;
        let total_pages = self.total_pages();
        if self.current_page > total_pages {
            self.current_page = total_pages.max(1);
        }
        Ok(self.current())
    }

    fn slice(&self, page: usize) -> PageSlice<'_, T> {
        let total_pages = self.total_pages();
        let start = page.saturating_sub(1).saturating_mul(self.page_size).min(self.items.len());
        let end = start.saturating_add(self.page_size).min(self.items.len());
        PageSlice {
            records: self.items.get(start..end).unwrap_or(&[]),
            page,
            total_pages,
            page_size: self.page_size,
            total_items: self.items.len(),
        }
    }
}
