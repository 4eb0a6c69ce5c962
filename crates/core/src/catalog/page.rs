//! Pagination stage of the catalog pipeline.

use serde::{Deserialize, Serialize};

/// Items per page when nothing else is chosen.
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 8;

/// Per-page choices offered by catalog views.
pub const PER_PAGE_CHOICES: [u32; 3] = [4, 8, 12];

/// Requested page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-indexed).
    pub current_page: u32,
    /// Items per page.
    pub items_per_page: u32,
}

impl Pagination {
    /// Create a page window; zero values are raised to 1.
    #[must_use]
    pub fn new(current_page: u32, items_per_page: u32) -> Self {
        Self {
            current_page: current_page.max(1),
            items_per_page: items_per_page.max(1),
        }
    }

    /// Index of the first item on the current page.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.current_page.saturating_sub(1) as usize).saturating_mul(self.items_per_page as usize)
    }

    /// Number of pages needed for `total_count` items; zero when empty.
    #[must_use]
    pub fn total_pages(&self, total_count: usize) -> u32 {
        let pages = total_count.div_ceil(self.items_per_page.max(1) as usize);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// The same window moved to `page`.
    #[must_use]
    pub fn with_page(self, page: u32) -> Self {
        Self::new(page, self.items_per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_ITEMS_PER_PAGE)
    }
}

/// One page of results plus the counts needed to render a pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Number of items across all pages.
    pub total_count: usize,
    /// Number of pages; zero when there are no items.
    pub total_pages: u32,
    /// The page these items belong to.
    pub current_page: u32,
    /// Page size used to cut this page.
    pub items_per_page: u32,
}

impl<T> Page<T> {
    /// Whether this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Transform every item, keeping the counts.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            current_page: self.current_page,
            items_per_page: self.items_per_page,
        }
    }
}

impl<T: Clone> Page<&T> {
    /// Clone borrowed items into an owned page.
    #[must_use]
    pub fn cloned(self) -> Page<T> {
        self.map(T::clone)
    }
}

/// Cut the requested page out of `items`.
///
/// A page past the end yields an empty page, not an error.
pub fn paginate<T>(items: Vec<T>, pagination: Pagination) -> Page<T> {
    let total_count = items.len();
    let page_items = items
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.items_per_page as usize)
        .collect();

    Page {
        items: page_items,
        total_count,
        total_pages: pagination.total_pages(total_count),
        current_page: pagination.current_page,
        items_per_page: pagination.items_per_page,
    }
}
