use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{DiglotError, Result};
use crate::types::scripture::TranslationSpec;

/// How translation ids are derived. One policy applies to the whole run;
/// it is used both for the reference lookup and for column headers.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Id is the language tag alone (e.g. "de").
    #[default]
    #[serde(rename = "lang")]
    Language,
    /// Id is language tag plus abbreviation (e.g. "de_LUT"). Needed when
    /// two translations share a language.
    #[serde(rename = "langAbbr")]
    LanguageAbbr,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// First entry is the reference translation whose chapter/verse
    /// structure defines the grid.
    pub translations: Vec<TranslationSpec>,
    #[serde(default, rename = "idPolicy")]
    pub id_policy: IdPolicy,
    /// Replace ASCII angle-bracket quote markers with typographic quotes
    /// before parsing.
    #[serde(default, rename = "typographicQuotes")]
    pub typographic_quotes: bool,
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(file_path).map_err(|e| DiglotError::ConfigRead {
        path: file_path.display().to_string(),
        message: e.to_string(),
    })?;
    let config: Config =
        serde_json::from_str(&contents).map_err(|e| DiglotError::ConfigParse {
            path: file_path.display().to_string(),
            message: e.to_string(),
        })?;
    if config.translations.is_empty() {
        return Err(DiglotError::Config(format!(
            "No translations listed in '{}'",
            file_path.display()
        )));
    }
    Ok(config)
}
