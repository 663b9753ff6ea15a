//! Merge configuration.

use serde::{Deserialize, Serialize};

/// Knobs shared by every merge operation.
///
/// The defaults match the record layout produced by the upstream providers:
/// the identity attribute is `id` and duplicate keys look like `age_1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Key skipped by the same-value comparator.
    pub identity_key: String,
    /// Separator between a base key and its suffix.
    pub suffix_separator: char,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            identity_key: "id".to_string(),
            suffix_separator: '_',
        }
    }
}

impl MergeConfig {
    /// Sets the key skipped by the same-value comparator.
    #[must_use]
    pub fn with_identity_key(mut self, key: impl Into<String>) -> Self {
        self.identity_key = key.into();
        self
    }

    /// Sets the suffix separator.
    #[must_use]
    pub fn with_suffix_separator(mut self, separator: char) -> Self {
        self.suffix_separator = separator;
        self
    }

    /// Joins a base key and a suffix with the configured separator.
    #[must_use]
    pub fn suffixed(&self, base: &str, suffix: &str) -> String {
        format!("{base}{}{suffix}", self.suffix_separator)
    }
}
