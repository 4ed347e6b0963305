//! Fixed-size page windows over ordered listings.
//!
//! Pages are 1-based. Page `n` covers the half-open index range
//! `[(n - 1) * PAGE_SIZE, n * PAGE_SIZE)`. There is no upper bound on `n`;
//! a page past the end of the listing is simply empty, and so is page 0.

use serde::Serialize;

/// Number of records per page, shared by every listing endpoint.
pub const PAGE_SIZE: usize = 10;

/// A 1-based page number, as taken from the `?page=` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
}

impl PageRequest {
    pub fn new(page: u32) -> Self {
        Self { page }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Index of the first record on this page.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(PAGE_SIZE)
    }

    /// Maximum number of records on this page. Page 0 holds nothing.
    pub fn limit(&self) -> usize {
        if self.page == 0 {
            0
        } else {
            PAGE_SIZE
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Slice one page out of an already ordered listing.
///
/// ```
/// use casting_core::pagination::{paginate, PageRequest};
///
/// let items: Vec<u32> = (0..25).collect();
/// assert_eq!(paginate(&items, PageRequest::new(3)), &[20, 21, 22, 23, 24]);
/// assert!(paginate(&items, PageRequest::new(4)).is_empty());
/// ```
pub fn paginate<T>(items: &[T], request: PageRequest) -> &[T] {
    let start = request.offset().min(items.len());
    let end = start.saturating_add(request.limit()).min(items.len());
    &items[start..end]
}

/// One page of a listing together with the unpaginated record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
