//! Page window over the row sequence
//!
//! The pager owns only the page index and page size; it slices whatever row
//! count it is given and is re-clamped whenever the data changes.

use std::ops::Range;

/// Recognized rows-per-page options
pub const PAGE_SIZES: [usize; 5] = [10, 20, 30, 40, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_index: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: PAGE_SIZES[0],
        }
    }
}

impl Pager {
    /// Create a pager with a recognized page size
    ///
    /// Panics if `page_size` is not one of [`PAGE_SIZES`]; user-supplied
    /// sizes are validated at the CLI/command boundary.
    pub fn new(page_size: usize) -> Self {
        assert!(
            PAGE_SIZES.contains(&page_size),
            "unrecognized page size {}",
            page_size
        );
        Self {
            page_index: 0,
            page_size,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `row_count` rows; never less than one
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size).max(1)
    }

    pub fn first(&mut self) {
        self.page_index = 0;
    }

    pub fn prev(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next(&mut self, row_count: usize) {
        self.page_index = (self.page_index + 1).min(self.page_count(row_count) - 1);
    }

    /// Jump to a page (0-indexed), clamped to the valid range
    pub fn goto(&mut self, page: usize, row_count: usize) {
        self.page_index = page.min(self.page_count(row_count) - 1);
    }

    /// Change the page size, keeping the current window's first row visible
    ///
    /// Returns false (and changes nothing) for unrecognized sizes.
    pub fn set_page_size(&mut self, size: usize, row_count: usize) -> bool {
        if !PAGE_SIZES.contains(&size) {
            return false;
        }
        let top_row = self.page_index * self.page_size;
        self.page_size = size;
        self.page_index = top_row / size;
        self.clamp(row_count);
        true
    }

    /// Re-clamp the page index after the row count changed
    pub fn clamp(&mut self, row_count: usize) {
        self.page_index = self.page_index.min(self.page_count(row_count) - 1);
    }

    /// Index range of the rows in the current page window
    pub fn page_range(&self, row_count: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(row_count);
        let end = (start + self.page_size).min(row_count);
        start..end
    }
}
