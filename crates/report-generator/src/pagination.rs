//! Page arithmetic for the synthesized report.

use crate::identifier::Identifier;
use serde::Serialize;

/// Number of rows on every page except possibly the last.
pub const ROWS_PER_PAGE: usize = 20;

/// Page layout derived from an item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// `ceil(total_items / rows_per_page)`
    pub page_count: usize,
    pub rows_per_page: usize,
    pub total_items: usize,
    /// Rows on the final page. A zero remainder means the last page is full.
    ///
    /// Informational only: page synthesis slices the identifier list itself
    /// and never reads this field.
    pub last_page_row_count: usize,
}

impl Pagination {
    /// Compute the layout for `total_items` items.
    ///
    /// A `rows_per_page` of zero is treated as one.
    pub fn new(total_items: usize, rows_per_page: usize) -> Self {
        let rows_per_page = rows_per_page.max(1);
        let remainder = total_items % rows_per_page;

        Self {
            page_count: total_items.div_ceil(rows_per_page),
            rows_per_page,
            total_items,
            last_page_row_count: if remainder == 0 {
                rows_per_page
            } else {
                remainder
            },
        }
    }

    /// Number of rows that belong on the 0-based page `page`.
    ///
    /// Pages past the end have zero rows.
    pub fn rows_on_page(&self, page: usize) -> usize {
        let start = page.saturating_mul(self.rows_per_page);
        self.total_items
            .saturating_sub(start)
            .min(self.rows_per_page)
    }
}

/// Paginate `identifiers` with the fixed [`ROWS_PER_PAGE`].
pub fn paginate(identifiers: &[Identifier]) -> Pagination {
    Pagination::new(identifiers.len(), ROWS_PER_PAGE)
}
