//! Localization string tables.
//!
//! Holds one key → text table per locale, with English as the fallback.
//! Content packs install their strings at registration time via
//! [`LocalizationState::merge_json`]; display code resolves keys through
//! `t()` and never stores resolved text.

use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Default locale used when no locale is explicitly set.
pub const DEFAULT_LOCALE: &str = "en";

/// A string table maps localization keys to translated text for one locale.
pub type StringTable = BTreeMap<String, String>;

/// All string tables and the currently active locale.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizationState {
    pub active_locale: String,
    pub tables: BTreeMap<String, StringTable>,
}

impl Default for LocalizationState {
    fn default() -> Self {
        Self {
            active_locale: DEFAULT_LOCALE.to_string(),
            tables: BTreeMap::new(),
        }
    }
}

impl LocalizationState {
    /// Look up a key in the active locale's table.
    /// Returns the translated string, or the key itself as a fallback.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// Look up a key, returning `None` if neither the active locale nor the
    /// English fallback table resolves it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tables
            .get(&self.active_locale)
            .and_then(|table| table.get(key).map(|s| s.as_str()))
            .or_else(|| {
                self.tables
                    .get(DEFAULT_LOCALE)
                    .and_then(|table| table.get(key).map(|s| s.as_str()))
            })
    }

    /// Set the active locale. A locale with no table is a no-op.
    pub fn set_locale(&mut self, locale: &str) {
        if self.tables.contains_key(locale) {
            self.active_locale = locale.to_string();
        }
    }

    /// Merge a flat JSON object of key → text pairs into a locale's table,
    /// creating the table if needed. Returns the number of merged entries.
    /// Existing keys are overwritten, which lets packs restyle host strings.
    pub fn merge_json(
        &mut self,
        locale: &str,
        json: &str,
    ) -> Result<usize, serde_json::Error> {
        let entries: StringTable = serde_json::from_str(json)?;
        let count = entries.len();
        self.tables
            .entry(locale.to_string())
            .or_default()
            .extend(entries);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_strings() -> LocalizationState {
        let mut state = LocalizationState::default();
        state
            .merge_json(
                "en",
                r#"{ "platform.title": "Platform", "platform.description": "A platform." }"#,
            )
            .unwrap();
        state
            .merge_json("de", r#"{ "platform.title": "Plattform" }"#)
            .unwrap();
        state
    }

    #[test]
    fn test_lookup_active_locale() {
        let state = state_with_strings();
        assert_eq!(state.t("platform.title"), "Platform");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let state = state_with_strings();
        assert_eq!(state.t("platform.unknown"), "platform.unknown");
        assert_eq!(state.get("platform.unknown"), None);
    }

    #[test]
    fn test_locale_switch_and_english_fallback() {
        let mut state = state_with_strings();
        state.set_locale("de");
        assert_eq!(state.t("platform.title"), "Plattform");
        // Key absent from the German table resolves through English.
        assert_eq!(state.t("platform.description"), "A platform.");
    }

    #[test]
    fn test_unknown_locale_is_noop() {
        let mut state = state_with_strings();
        state.set_locale("xx");
        assert_eq!(state.active_locale, "en");
    }

    #[test]
    fn test_merge_reports_count_and_overwrites() {
        let mut state = state_with_strings();
        let merged = state
            .merge_json("en", r#"{ "platform.title": "Foundation" }"#)
            .unwrap();
        assert_eq!(merged, 1);
        assert_eq!(state.t("platform.title"), "Foundation");
    }

    #[test]
    fn test_invalid_json_rejected() {
        let mut state = LocalizationState::default();
        assert!(state.merge_json("en", "not json").is_err());
    }
}
