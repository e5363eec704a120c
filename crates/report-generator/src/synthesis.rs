//! Row and page synthesis.

use crate::identifier::Identifier;
use crate::values::generate_biased_value;
use rand::Rng;
use serde::Serialize;

/// One synthesized table row.
///
/// Field names are part of the template contract and must not change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    /// Identifier at this row's position; serialized as `null` when there is none.
    pub q4: Option<Identifier>,
}

/// A batch of rows rendered together on one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 1-based page number.
    pub page_index: usize,
    pub rows: Vec<Row>,
}

/// Build a row from three independent samples and an optional identifier.
pub fn synthesize_row<R: Rng + ?Sized>(rng: &mut R, identifier: Option<&Identifier>) -> Row {
    Row {
        q1: generate_biased_value(rng),
        q2: generate_biased_value(rng),
        q3: generate_biased_value(rng),
        q4: identifier.cloned(),
    }
}

/// Build `page_count` pages of up to `rows_per_page` rows each.
///
/// Page `p` covers identifiers `[p * rows_per_page, (p + 1) * rows_per_page)`
/// and holds as many rows as there are identifiers left from its start, capped
/// at `rows_per_page`. A page that starts past the end of the list is still
/// emitted, with no rows.
pub fn synthesize_pages<R: Rng + ?Sized>(
    rng: &mut R,
    page_count: usize,
    rows_per_page: usize,
    identifiers: &[Identifier],
) -> Vec<Page> {
    let rows_per_page = rows_per_page.max(1);

    (0..page_count)
        .map(|page| {
            let start = page.saturating_mul(rows_per_page);
            let remaining = identifiers.len().saturating_sub(start);
            let row_count = remaining.min(rows_per_page);

            let rows = (start..start + row_count)
                .map(|global| synthesize_row(rng, identifiers.get(global)))
                .collect();

            Page {
                page_index: page + 1,
                rows,
            }
        })
        .collect()
}
