// src/core/view.rs
use crate::models::WordDensityItem;

/// Rows shown per page of the density detail view.
pub const PAGE_SIZE: usize = 5;

/// View state for the word-density detail view.
///
/// The density table is expensive relative to the scalar counters
/// (O(words log words) for the sort), so it is only computed while this
/// view is open, and every text change slams the view shut. Collapsing
/// or editing loses pagination and view-mode memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityView {
    open: bool,
    show_all: bool,
    /// 1-based current page; meaningful only while paginated.
    page: usize,
}

impl Default for DensityView {
    fn default() -> Self {
        Self::new()
    }
}

impl DensityView {
    /// Closed, paginated, page 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open: false,
            show_all: false,
            page: 1,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn is_show_all(&self) -> bool {
        self.show_all
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Opens a closed view or closes an open one. Closing forgets the
    /// page and the show-all choice.
    pub fn toggle(&mut self) {
        if self.open {
            *self = Self::new();
        } else {
            self.open = true;
        }
    }

    /// The text was replaced: close the view and reset everything, no
    /// matter what state it was in.
    pub fn text_changed(&mut self) {
        *self = Self::new();
    }

    /// Total pages for a row count; never less than 1.
    #[must_use]
    pub const fn total_pages(row_count: usize) -> usize {
        let pages = row_count.div_ceil(PAGE_SIZE);
        if pages == 0 { 1 } else { pages }
    }

    /// Whether `prev_page` would move.
    #[must_use]
    pub const fn can_prev(&self) -> bool {
        !self.show_all && self.page > 1
    }

    /// Whether `next_page` would move for this row count.
    #[must_use]
    pub const fn can_next(&self, row_count: usize) -> bool {
        !self.show_all && self.page < Self::total_pages(row_count)
    }

    /// Steps back one page; no-op at page 1 or in show-all mode.
    pub fn prev_page(&mut self) {
        if self.can_prev() {
            self.page -= 1;
        }
    }

    /// Steps forward one page; no-op at the last page or in show-all mode.
    pub fn next_page(&mut self, row_count: usize) {
        if self.can_next(row_count) {
            self.page += 1;
        }
    }

    /// Shows the full table, ignoring pagination.
    pub fn show_all(&mut self) {
        self.show_all = true;
    }

    /// Back to paginated display, starting over at page 1.
    pub fn paginate(&mut self) {
        self.show_all = false;
        self.page = 1;
    }

    /// Rank of the first visible row, 1-based against the full sorted
    /// sequence (page 2 starts at rank 6).
    #[must_use]
    pub const fn start_rank(&self) -> usize {
        if self.show_all {
            1
        } else {
            (self.page - 1) * PAGE_SIZE + 1
        }
    }

    /// The visible slice of the sorted rows.
    #[must_use]
    pub fn window<'a>(&self, rows: &'a [WordDensityItem]) -> &'a [WordDensityItem] {
        if self.show_all {
            return rows;
        }
        let start = (self.page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(rows.len());
        rows.get(start..end).unwrap_or(&[])
    }
}
