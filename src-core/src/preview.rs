//! Paging over a decoded dataset for the preview table.

use std::ops::Range;

use crate::decoder::Dataset;

/// Rows shown per preview page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Cursor over `total` items split into fixed-size, 1-based pages.
///
/// Pages are computed on demand from the caller's slice; the underlying data
/// is never copied or mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Pagination {
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// `ceil(total / page_size)`, never less than 1.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    pub fn go_to(self, page: usize) -> Self {
        Self {
            page: page.clamp(1, self.total_pages()),
            ..self
        }
    }

    pub fn next(self) -> Self {
        self.go_to(self.page + 1)
    }

    pub fn prev(self) -> Self {
        self.go_to(self.page.saturating_sub(1))
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Index range of the current page, `[(page-1)*size, page*size)` capped at `total`.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Range { start, end } = self.range();
        let end = end.min(items.len());
        &items[start.min(end)..end]
    }
}

/// Header list for the preview table, in file order.
pub fn columns(dataset: &Dataset) -> &[String] {
    &dataset.columns
}
