use serde::Deserialize;

use crate::config::IdPolicy;
use crate::identity;

/// One translation as listed in the run configuration. Order in the config
/// is significant: the first entry is the reference translation.
#[derive(Deserialize, Debug, Clone)]
pub struct TranslationSpec {
    pub lang: String,
    pub abbr: String,
    pub path: String,
}

/// Stable identifier derived from a TranslationSpec, used as map key and
/// as the rendered column header.
pub type TranslationId = String;

/// A verse-range label (e.g. "12" or "12-14") with its whitespace-normalized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerseGroup {
    pub verse_range: String,
    pub text: String,
}

/// Chapter/verse index for one chapter: an ordered sequence of verse slots,
/// each slot holding zero or more groups. Only the first group of a slot is
/// ever consumed downstream.
#[derive(Debug, Clone, Default)]
pub struct CvIndex {
    pub chapter: String,
    pub verses: Vec<Vec<VerseGroup>>,
}

/// Metadata handed to the engine alongside raw document content.
#[derive(Debug, Clone)]
pub struct DocumentMeta {
    pub lang: String,
    pub abbr: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub key: String,
    pub value: String,
}

/// One imported translation as exposed by the engine's query: selector
/// metadata plus the document's chapter/verse index.
#[derive(Debug, Clone)]
pub struct DocSet {
    pub selectors: Vec<Selector>,
    pub cv_indexes: Vec<CvIndex>,
}

impl DocSet {
    pub fn selector(&self, key: &str) -> Option<&str> {
        self.selectors
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.value.as_str())
    }

    /// The id this doc set answers to under the run's identity policy.
    pub fn resolved_id(&self, policy: IdPolicy) -> TranslationId {
        let lang = self.selector("lang").unwrap_or_default();
        let abbr = self.selector("abbr").unwrap_or_default();
        identity::resolve_parts(lang, abbr, policy)
    }
}
