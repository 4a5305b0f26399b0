use crate::parsing::usfm::parse_usfm;
use crate::types::scripture::{DocSet, DocumentMeta, Selector};

/// In-process document engine. Owns one doc set per imported translation,
/// in import order, and exposes them as the query result the alignment
/// engine consumes. Stands in for an external parsing engine with the same
/// import/query seam.
#[derive(Debug, Default)]
pub struct Engine {
    doc_sets: Vec<DocSet>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `content` and stores it under the meta's lang/abbr selectors.
    pub fn import_document(&mut self, meta: DocumentMeta, content: &str) {
        let cv_indexes = parse_usfm(content);
        self.doc_sets.push(DocSet {
            selectors: vec![
                Selector {
                    key: "lang".to_string(),
                    value: meta.lang,
                },
                Selector {
                    key: "abbr".to_string(),
                    value: meta.abbr,
                },
            ],
            cv_indexes,
        });
    }

    pub fn doc_sets(&self) -> &[DocSet] {
        &self.doc_sets
    }
}
