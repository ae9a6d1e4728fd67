//! Tokenizer and scorer settings
//!
//! [`SettingsConfig`] is the file format; [`Settings`] is the compiled,
//! read-only bundle shared by every tokenizer and classifier.

pub mod abbreviations;
pub mod config;

pub use config::SettingsConfig;

use crate::error::{Result, SamError};
use fancy_regex::Regex;
use std::collections::HashMap;
use std::path::Path;

/// Compiled settings
#[derive(Debug, Clone)]
pub struct Settings {
    config: SettingsConfig,
    abbreviation_finder: Regex,
    mark_not_to_separate: Regex,
    sentence_end_finder: Regex,
    non_alpha_numeric: Regex,
    find_links: Regex,
    emoji_pattern: Regex,
    abbreviations: HashMap<String, String>,
}

impl Settings {
    /// Compile a configuration, merging its abbreviations over the defaults
    pub fn from_config(config: SettingsConfig) -> Result<Self> {
        config.validate()?;

        let mut abbreviations = abbreviations::default_abbreviations();
        for (short, long) in &config.abbreviations {
            if let Some(previous) = abbreviations.insert(short.clone(), long.clone()) {
                log::debug!("Abbreviation '{short}' overrides default '{previous}'");
            }
        }

        Ok(Self {
            abbreviation_finder: compile("abbreviation_finder", &config.abbreviation_finder)?,
            mark_not_to_separate: compile("mark_not_to_separate", &config.mark_not_to_separate)?,
            sentence_end_finder: compile("sentence_end_finder", &config.sentence_end_finder)?,
            non_alpha_numeric: compile("non_alpha_numeric", &config.non_alpha_numeric)?,
            find_links: compile("find_links", &config.find_links)?,
            emoji_pattern: compile("emoji_pattern", &config.emoji_pattern)?,
            abbreviations,
            config,
        })
    }

    /// Load settings from a `.toml` or `.json` file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SamError::ConfigurationError(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            SettingsConfig::from_json_str(&content)
        } else {
            SettingsConfig::from_toml_str(&content)
        }
        .map_err(|e| {
            SamError::ConfigurationError(format!("Failed to load '{}': {}", path.display(), e))
        })?;

        Self::from_config(config)
    }

    pub fn config(&self) -> &SettingsConfig {
        &self.config
    }

    pub fn abbreviation_finder(&self) -> &Regex {
        &self.abbreviation_finder
    }

    pub fn sentence_end_finder(&self) -> &Regex {
        &self.sentence_end_finder
    }

    /// Pattern for characters outside the expected alphabet
    ///
    /// Validated and exposed for callers; the tokenizer itself does not use it.
    pub fn non_alpha_numeric(&self) -> &Regex {
        &self.non_alpha_numeric
    }

    pub fn find_links(&self) -> &Regex {
        &self.find_links
    }

    pub fn emoji_pattern(&self) -> &Regex {
        &self.emoji_pattern
    }

    /// Whether `ch` belongs to the marks that stay attached to letters
    pub fn is_mark_not_to_separate(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.mark_not_to_separate
            .is_match(ch.encode_utf8(&mut buf))
            .unwrap_or(false)
    }

    /// Look up the expansion of a period-free short form
    pub fn expansion(&self, short: &str) -> Option<&str> {
        self.abbreviations.get(short).map(String::as_str)
    }

    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    pub fn abbreviation_expansion(&self) -> bool {
        self.config.abbreviation_expansion
    }

    pub fn write_non_match_tokens(&self) -> bool {
        self.config.write_non_match_tokens
    }

    pub fn remove_links(&self) -> bool {
        self.config.remove_links
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(SettingsConfig::default()).expect("built-in settings must compile")
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| SamError::InvalidPattern {
        name,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_default_settings_compile() {
        let settings = Settings::default();
        assert!(settings.abbreviation_expansion());
        assert_eq!(settings.expansion("osv"), Some("og så videre"));
        assert!(settings.is_mark_not_to_separate('-'));
        assert!(!settings.is_mark_not_to_separate(','));
    }

    #[test]
    fn test_default_finder_matches_known_forms() {
        let settings = Settings::default();
        let finder = settings.abbreviation_finder();
        assert!(finder.is_match("jeg hader dig osv.").unwrap());
        assert!(finder.is_match("du er f.eks. grim").unwrap());
        assert!(finder.is_match("drej .th ").unwrap());
        assert!(!finder.is_match("hej med dig").unwrap());
    }

    #[test]
    fn test_extra_abbreviations_override_defaults() {
        let mut config = SettingsConfig::default();
        config
            .abbreviations
            .insert("osv".to_string(), "og so videre".to_string());
        config
            .abbreviations
            .insert("ca".to_string(), "cirka".to_string());

        let settings = Settings::from_config(config).unwrap();
        assert_eq!(settings.expansion("osv"), Some("og so videre"));
        assert_eq!(settings.expansion("ca"), Some("cirka"));
        assert_eq!(
            settings.abbreviation_count(),
            abbreviations::DEFAULT_ABBREVIATIONS.len() + 1
        );
    }

    #[test]
    fn test_invalid_pattern_is_reported_by_name() {
        let config = SettingsConfig {
            emoji_pattern: "(unclosed".to_string(),
            ..SettingsConfig::default()
        };

        match Settings::from_config(config) {
            Err(SamError::InvalidPattern { name, .. }) => assert_eq!(name, "emoji_pattern"),
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "abbreviation_expansion = false").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert!(!settings.abbreviation_expansion());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{ "abbreviation_expansion": false, "removeLinks": false }}"#).unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert!(!settings.abbreviation_expansion());
        assert!(!settings.remove_links());
    }

    #[test]
    fn test_from_missing_file() {
        let result = Settings::from_file(Path::new("/nonexistent/settings.toml"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
