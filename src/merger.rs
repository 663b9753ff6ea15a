//! A config-carrying entry point to the merge helpers.
//!
//! The free functions use [`MergeConfig::default`]. Callers whose providers
//! use another identity key or suffix separator build a [`RecordMerger`] once
//! and go through it instead.

use crate::config::MergeConfig;
use crate::copy::copy_nested_records;
use crate::diff::{find_keys_with_different_values, find_keys_with_same_values_with};
use crate::duplicate::resolve_duplicated_keys_with;
use crate::entity::Entity;
use crate::error::MergeResult;
use crate::haystack::format_haystack_json;
use crate::key::{parse_suffixed_key_with, SuffixedKey};
use crate::record::ValueRecord;

/// Applies one [`MergeConfig`] to every merge operation.
///
/// # Examples
///
/// ```
/// use entity_merge::{Entity, MergeConfig, RecordMerger, ValueRecord};
///
/// let merger = RecordMerger::new(MergeConfig::default().with_suffix_separator('-'));
///
/// let mut first = Entity::new();
/// first.insert("age-1", ValueRecord::new(30));
/// let mut second = Entity::new();
/// second.insert("age", ValueRecord::new(25).with_source("B"));
///
/// merger.resolve_duplicated_keys(&first, &mut second)?;
/// assert!(second.contains_key("age-B"));
/// # Ok::<(), entity_merge::MergeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordMerger {
    config: MergeConfig,
}

impl RecordMerger {
    /// Creates a merger using `config`.
    #[must_use]
    pub const fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// See [`Entity::rename_key`].
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::KeyNotFound`](crate::MergeError::KeyNotFound)
    /// if `old_key` is absent.
    pub fn rename_key<'e>(
        &self,
        entity: &'e mut Entity,
        old_key: &str,
        new_key: &str,
    ) -> MergeResult<&'e mut Entity> {
        entity.rename_key(old_key, new_key)
    }

    /// Parses `key` with the configured separator.
    #[must_use]
    pub fn parse_suffixed_key<'k>(&self, key: &'k str) -> Option<SuffixedKey<'k>> {
        parse_suffixed_key_with(key, self.config.suffix_separator)
    }

    /// Same-value keys, skipping the configured identity key.
    #[must_use]
    pub fn find_keys_with_same_values(&self, first: &Entity, second: &Entity) -> Vec<String> {
        find_keys_with_same_values_with(&self.config, first, second)
    }

    /// Different-value keys. The config does not apply.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn find_keys_with_different_values(&self, first: &Entity, second: &Entity) -> Vec<String> {
        find_keys_with_different_values(first, second)
    }

    /// See [`resolve_duplicated_keys`](crate::resolve_duplicated_keys).
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::MissingApiSource`](crate::MergeError::MissingApiSource)
    /// if a record that needs renaming has no source tag.
    pub fn resolve_duplicated_keys(&self, first: &Entity, second: &mut Entity) -> MergeResult<()> {
        resolve_duplicated_keys_with(&self.config, first, second)
    }

    /// See [`copy_nested_records`]. The config does not apply.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn copy_nested_records(&self, batches: &[Vec<ValueRecord>]) -> Vec<Vec<ValueRecord>> {
        copy_nested_records(batches)
    }

    /// See [`format_haystack_json`]. The config does not apply.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn format_haystack_json(
        &self,
        entities: &[Entity],
    ) -> Vec<serde_json::Map<String, serde_json::Value>> {
        format_haystack_json(entities)
    }
}
