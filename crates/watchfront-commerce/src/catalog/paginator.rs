//! Fixed-size pagination over the loaded catalog.

use std::ops::Range;

use crate::catalog::{Catalog, CatalogState, Product};

/// Products per page on the listing.
pub const DEFAULT_PAGE_SIZE: usize = 48;

/// The products visible on one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageSlice<'a> {
    /// The catalog has not loaded; render a loading indicator.
    Unloaded,
    /// The window `[start, end)` of the catalog. May be empty past the last page.
    Loaded(&'a [Product]),
}

impl<'a> PageSlice<'a> {
    /// The products on the page, if loaded.
    pub fn products(&self) -> Option<&'a [Product]> {
        match self {
            PageSlice::Loaded(products) => Some(products),
            PageSlice::Unloaded => None,
        }
    }

    /// Check if loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self, PageSlice::Loaded(_))
    }

    /// Number of products on the page (0 when unloaded).
    pub fn len(&self) -> usize {
        self.products().map_or(0, <[Product]>::len)
    }

    /// Check if the page shows nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Page cursor over the catalog.
///
/// Pages are 1-indexed; page `i` covers `[(i - 1) * page_size, i * page_size)`.
/// Whether a next page exists is inferred from the current page being full,
/// so a catalog whose length is an exact multiple of the page size offers one
/// trailing empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_index: usize,
    page_size: usize,
}

impl Paginator {
    /// Create a paginator on page 1. A zero page size is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 1,
            page_size: page_size.max(1),
        }
    }

    /// Current page (1-indexed).
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The `[start, end)` window of the current page, unclamped.
    pub fn range(&self) -> Range<usize> {
        window(self.page_index, self.page_size)
    }

    /// Products on the current page.
    pub fn current_slice<'a>(&self, state: &'a CatalogState) -> PageSlice<'a> {
        self.page(state, self.page_index)
    }

    /// Products on an arbitrary page, without moving the cursor.
    pub fn page<'a>(&self, state: &'a CatalogState, page_index: usize) -> PageSlice<'a> {
        match state {
            CatalogState::Unloaded => PageSlice::Unloaded,
            CatalogState::Loaded(catalog) => {
                PageSlice::Loaded(slice(catalog, page_index, self.page_size))
            }
        }
    }

    /// True iff the cursor is past page 1.
    pub fn can_go_prev(&self) -> bool {
        self.page_index > 1
    }

    /// True iff the current page is full. Always false while unloaded.
    pub fn can_go_next(&self, state: &CatalogState) -> bool {
        match self.current_slice(state) {
            PageSlice::Loaded(products) => products.len() == self.page_size,
            PageSlice::Unloaded => false,
        }
    }

    /// Move the cursor by `delta` pages.
    ///
    /// Callers must gate with [`can_go_prev`](Self::can_go_prev) and
    /// [`can_go_next`](Self::can_go_next). Moving below page 1 is a contract
    /// violation: it trips a debug assertion and saturates at page 1 otherwise.
    pub fn advance(&mut self, delta: isize) {
        let target = self
            .page_index
            .checked_add_signed(delta)
            .filter(|page| *page >= 1);
        debug_assert!(
            target.is_some(),
            "page index {} moved by {} below 1; gate calls with can_go_prev",
            self.page_index,
            delta
        );
        self.page_index = target.unwrap_or(1);
    }

    /// Go to the next page if allowed. Returns whether the cursor moved.
    pub fn next_page(&mut self, state: &CatalogState) -> bool {
        if !self.can_go_next(state) {
            return false;
        }
        self.advance(1);
        true
    }

    /// Go to the previous page if allowed. Returns whether the cursor moved.
    pub fn prev_page(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.advance(-1);
        true
    }

    /// Number of non-empty pages (at least 1), for "page i of n" display.
    pub fn page_count(&self, catalog: &Catalog) -> usize {
        catalog.len().div_ceil(self.page_size).max(1)
    }

    /// Return to page 1, e.g. after the catalog is replaced.
    pub fn reset(&mut self) {
        self.page_index = 1;
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

fn window(page_index: usize, page_size: usize) -> Range<usize> {
    let start = page_index.saturating_sub(1).saturating_mul(page_size);
    start..start.saturating_add(page_size)
}

fn slice(catalog: &Catalog, page_index: usize, page_size: usize) -> &[Product] {
    let products = catalog.products();
    let Range { start, end } = window(page_index, page_size);
    let start = start.min(products.len());
    let end = end.min(products.len());
    &products[start..end]
}
