use crate::config::IdPolicy;
use crate::error::{DiglotError, Result};
use crate::types::scripture::{TranslationId, TranslationSpec};

pub fn resolve_id(spec: &TranslationSpec, policy: IdPolicy) -> TranslationId {
    resolve_parts(&spec.lang, &spec.abbr, policy)
}

/// Shared by resolve_id and DocSet::resolved_id so the config side and the
/// engine side can never disagree on id shape.
pub fn resolve_parts(lang: &str, abbr: &str, policy: IdPolicy) -> TranslationId {
    match policy {
        IdPolicy::Language => lang.to_string(),
        IdPolicy::LanguageAbbr => format!("{}_{}", lang, abbr),
    }
}

/// Resolves every configured translation, in config order, rejecting any
/// pair that collapses to the same id. A collision would silently merge two
/// translations' content into one column.
pub fn resolve_all(specs: &[TranslationSpec], policy: IdPolicy) -> Result<Vec<TranslationId>> {
    let mut ids: Vec<TranslationId> = Vec::with_capacity(specs.len());
    for spec in specs {
        let id = resolve_id(spec, policy);
        if let Some(pos) = ids.iter().position(|existing| *existing == id) {
            return Err(DiglotError::IdentityCollision {
                first: specs[pos].path.clone(),
                second: spec.path.clone(),
                id,
            });
        }
        ids.push(id);
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(lang: &str, abbr: &str, path: &str) -> TranslationSpec {
        TranslationSpec {
            lang: lang.to_string(),
            abbr: abbr.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn language_only_policy() {
        assert_eq!(resolve_id(&spec("en", "KJV", "a"), IdPolicy::Language), "en");
    }

    #[test]
    fn language_abbr_policy() {
        assert_eq!(
            resolve_id(&spec("en", "KJV", "a"), IdPolicy::LanguageAbbr),
            "en_KJV"
        );
    }

    #[test]
    fn registration_order_is_preserved() {
        let ids = resolve_all(
            &[spec("en", "KJV", "a"), spec("de", "LUT", "b"), spec("fr", "LSG", "c")],
            IdPolicy::Language,
        )
        .unwrap();
        assert_eq!(ids, vec!["en", "de", "fr"]);
    }

    #[test]
    fn collision_is_rejected() {
        let err = resolve_all(
            &[spec("en", "KJV", "a"), spec("en", "WEB", "b")],
            IdPolicy::Language,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DiglotError::IdentityCollision { ref id, .. } if id == "en"
        ));
    }

    #[test]
    fn abbreviation_disambiguates_same_language() {
        let ids = resolve_all(
            &[spec("en", "KJV", "a"), spec("en", "WEB", "b")],
            IdPolicy::LanguageAbbr,
        )
        .unwrap();
        assert_eq!(ids, vec!["en_KJV", "en_WEB"]);
    }
}
