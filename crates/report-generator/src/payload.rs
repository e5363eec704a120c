//! The report payload handed to document templates.
//!
//! Only `pages` is stored. The legacy `rows` view (first page's rows) and the
//! `pagesRest` view (every page after the first) are derived from it when
//! asked for or when the payload is serialized.

use crate::synthesis::{Page, Row};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Pages ready for rendering, plus the views older templates expect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportPayload {
    pages: Vec<Page>,
}

impl ReportPayload {
    /// All pages in ascending `pageIndex` order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Rows of the first page, or an empty slice when there are no pages.
    pub fn rows(&self) -> &[Row] {
        self.pages
            .first()
            .map(|page| page.rows.as_slice())
            .unwrap_or(&[])
    }

    /// Every page after the first.
    pub fn pages_rest(&self) -> &[Page] {
        self.pages.get(1..).unwrap_or(&[])
    }
}

impl Serialize for ReportPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ReportPayload", 3)?;
        state.serialize_field("pages", self.pages())?;
        state.serialize_field("rows", self.rows())?;
        state.serialize_field("pagesRest", self.pages_rest())?;
        state.end()
    }
}

/// Package synthesized pages into a payload. Never fails.
pub fn assemble(pages: Vec<Page>) -> ReportPayload {
    ReportPayload { pages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::Identifier;
    use serde_json::json;

    fn page(index: usize, ids: &[&str]) -> Page {
        Page {
            page_index: index,
            rows: ids
                .iter()
                .map(|id| Row {
                    q1: 0.1,
                    q2: 0.2,
                    q3: 0.3,
                    q4: Identifier::new(id),
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_payload() {
        let payload = assemble(vec![]);
        assert!(payload.pages().is_empty());
        assert!(payload.rows().is_empty());
        assert!(payload.pages_rest().is_empty());

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"pages": [], "rows": [], "pagesRest": []}));
    }

    #[test]
    fn test_single_page_payload() {
        let payload = assemble(vec![page(1, &["A", "B"])]);
        assert_eq!(payload.pages().len(), 1);
        assert_eq!(payload.rows().len(), 2);
        assert!(payload.pages_rest().is_empty());
    }

    #[test]
    fn test_multi_page_views() {
        let payload = assemble(vec![page(1, &["A", "B"]), page(2, &["C"]), page(3, &["D"])]);

        assert_eq!(payload.rows(), payload.pages()[0].rows.as_slice());
        assert_eq!(payload.pages_rest().len(), 2);
        assert_eq!(payload.pages_rest()[0].page_index, 2);
        assert_eq!(payload.pages_rest()[1].page_index, 3);
    }

    #[test]
    fn test_serialized_shape() {
        let payload = assemble(vec![page(1, &["A"]), page(2, &["B"])]);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["pages"].as_array().unwrap().len(), 2);
        assert_eq!(value["rows"], value["pages"][0]["rows"]);
        assert_eq!(value["pagesRest"], json!([value["pages"][1].clone()]));
        assert_eq!(value["rows"][0]["q4"], "A");
        assert_eq!(value["pagesRest"][0]["pageIndex"], 2);
    }
}
