//! Serializable settings file format

use crate::error::{Result, SamError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Abbreviation finder, alternatives ordered longest first
pub const DEFAULT_ABBREVIATION_FINDER: &str = concat!(
    r"(f\.eks\.?)|(?<= )(f\.eks|o\.fl|ph\.d|m\.fl|bl\.a|eksl|inkl|feks|vedr|vejl|lign|",
    r"adm|adr|afd|alm|ang|dvs|e\.g|evt|fhv|frk|h\.c|hhv|i\.e|ifb|ifl|jvf|kbh|mio|mrs|",
    r"ofl|osv|opg|org|p\.t|pga|s\.u|sek|vha|mfl|mia|m\.m|mvh|dsv|a\.i|",
    r"bh|fx|hr|jf|jr|ml|mr|mm|mv|vh|d\.|m\.)[.!? ]?( |$)|\.t[hv] ",
);

/// Characters that stay attached to the surrounding letters
pub const DEFAULT_MARK_NOT_TO_SEPARATE: &str = r"[-]";

/// One terminator not followed by another terminator
pub const DEFAULT_SENTENCE_END_FINDER: &str = r"[.!?](?![.!?])";

pub const DEFAULT_NON_ALPHA_NUMERIC: &str = r"[^a-zæøå\s:é-]";

pub const DEFAULT_FIND_LINKS: &str = r"((https?://)|(www\.))([\w-]+\.)+[\w-]+(/[\w .?%&=/-]+)?";

pub const DEFAULT_EMOJI_PATTERN: &str = concat!(
    "\u{1F44E}|\u{1F47F}|\u{1F4A4}|\u{1F595}\u{1F3FC}|\u{1F601}|\u{1F60E}|\u{1F610}|",
    "\u{1F612}|\u{1F621}|\u{1F622}|\u{1F624}|\u{1F628}|\u{1F62C}|\u{1F630}|\u{1F631}|",
    "\u{1F926}\u{200D}|\u{1F616}|\u{1F922}|\u{1F92C}|\u{1F92D}|\u{1F92E}",
);

/// Settings as read from a TOML or JSON file
///
/// Every key is optional. Extra `abbreviations` entries are merged over the
/// built-in dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    #[serde(alias = "abbreviationFinder")]
    pub abbreviation_finder: String,

    #[serde(alias = "markNotToSeparate", alias = "markNotToSeperate")]
    pub mark_not_to_separate: String,

    #[serde(alias = "sentenceEndFinder", alias = "sentenceEnd")]
    pub sentence_end_finder: String,

    #[serde(alias = "nonAlphaNumeric")]
    pub non_alpha_numeric: String,

    #[serde(alias = "findLinks")]
    pub find_links: String,

    #[serde(alias = "emojiPattern", alias = "emoji")]
    pub emoji_pattern: String,

    /// Expand abbreviations before splitting sentences
    #[serde(alias = "abbreviationExpansion")]
    pub abbreviation_expansion: bool,

    /// Count words missing from the lexicon
    #[serde(alias = "writeNonMatchTokens")]
    pub write_non_match_tokens: bool,

    /// Replace links with a marker before tokenizing
    #[serde(alias = "removeLinks")]
    pub remove_links: bool,

    /// Additional or overriding dictionary entries
    pub abbreviations: BTreeMap<String, String>,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            abbreviation_finder: DEFAULT_ABBREVIATION_FINDER.to_string(),
            mark_not_to_separate: DEFAULT_MARK_NOT_TO_SEPARATE.to_string(),
            sentence_end_finder: DEFAULT_SENTENCE_END_FINDER.to_string(),
            non_alpha_numeric: DEFAULT_NON_ALPHA_NUMERIC.to_string(),
            find_links: DEFAULT_FIND_LINKS.to_string(),
            emoji_pattern: DEFAULT_EMOJI_PATTERN.to_string(),
            abbreviation_expansion: true,
            write_non_match_tokens: false,
            remove_links: true,
            abbreviations: BTreeMap::new(),
        }
    }
}

impl SettingsConfig {
    /// Parse from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| SamError::ConfigurationError(format!("Failed to parse TOML: {e}")))
    }

    /// Parse from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| SamError::ConfigurationError(format!("Failed to parse JSON: {e}")))
    }

    /// Check the values that compile but cannot work
    pub fn validate(&self) -> Result<()> {
        if self.sentence_end_finder.is_empty() {
            return Err(SamError::ConfigurationError(
                "sentence_end_finder must not be empty".to_string(),
            ));
        }

        if self.abbreviation_expansion && self.abbreviation_finder.is_empty() {
            return Err(SamError::ConfigurationError(
                "abbreviation_finder must not be empty when abbreviation_expansion is enabled"
                    .to_string(),
            ));
        }

        for (short, long) in &self.abbreviations {
            if short.is_empty() || short.contains('.') {
                return Err(SamError::ConfigurationError(format!(
                    "Abbreviation key '{short}' must be non-empty and written without periods"
                )));
            }
            if long.trim().is_empty() {
                return Err(SamError::ConfigurationError(format!(
                    "Abbreviation '{short}' has an empty expansion"
                )));
            }
        }

        Ok(())
    }

    /// Render as a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SamError::ConfigurationError(format!("Failed to render TOML: {e}")))
    }
}
