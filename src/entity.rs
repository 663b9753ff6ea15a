//! Entities: ordered maps from attribute key to [`ValueRecord`].
//!
//! An entity is everything one data source knows about a logical object.
//! Iteration order is insertion order, and every comparator in this crate
//! reports keys in that order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{MergeError, MergeResult};
use crate::record::ValueRecord;

/// A mapping from key to [`ValueRecord`] with stable iteration order.
///
/// # Examples
///
/// ```
/// use entity_merge::{Entity, ValueRecord};
///
/// let mut entity = Entity::new();
/// entity.insert("age", ValueRecord::new(30).with_source("A"));
/// entity.insert("dis", ValueRecord::new("Site 1").with_source("A"));
///
/// let keys: Vec<&str> = entity.keys().collect();
/// assert_eq!(keys, ["age", "dis"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(IndexMap<String, ValueRecord>);

impl Entity {
    /// Creates an empty entity.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Parses an entity from a JSON object of records.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Serialization`] if the document is not an object
    /// of `{"val": ...}` records.
    pub fn from_json_str(json: &str) -> MergeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds an entity from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Serialization`] if the value is not an object
    /// of `{"val": ...}` records.
    pub fn from_json(value: serde_json::Value) -> MergeResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Inserts a record. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, record: ValueRecord) -> Option<ValueRecord> {
        self.0.insert(key.into(), record)
    }

    /// Record stored at `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ValueRecord> {
        self.0.get(key)
    }

    /// Mutable access to the record stored at `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut ValueRecord> {
        self.0.get_mut(key)
    }

    /// Own-key membership test.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, keeping the relative order of the others.
    pub fn remove(&mut self, key: &str) -> Option<ValueRecord> {
        self.0.shift_remove(key)
    }

    /// Keys in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Key/record pairs in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueRecord)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the entity has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Moves the record stored at `old_key` to `new_key`.
    ///
    /// The whole record moves, `apiSource` and extra fields included. The new
    /// key is appended to the iteration order unless it already exists, in
    /// which case its record is overwritten in place. Returns `self` so calls
    /// can be chained.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::KeyNotFound`] if `old_key` is absent; the entity
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_merge::{Entity, ValueRecord};
    ///
    /// let mut entity = Entity::new();
    /// entity.insert("age", ValueRecord::new(25).with_source("B"));
    /// entity.rename_key("age", "age_B")?;
    ///
    /// assert!(!entity.contains_key("age"));
    /// assert_eq!(entity.get("age_B"), Some(&ValueRecord::new(25).with_source("B")));
    /// # Ok::<(), entity_merge::MergeError>(())
    /// ```
    pub fn rename_key(&mut self, old_key: &str, new_key: &str) -> MergeResult<&mut Self> {
        if !self.0.contains_key(old_key) {
            return Err(MergeError::key_not_found(old_key));
        }
        if old_key != new_key {
            if let Some(record) = self.0.shift_remove(old_key) {
                self.0.insert(new_key.to_string(), record);
            }
        }
        Ok(self)
    }
}

impl FromIterator<(String, ValueRecord)> for Entity {
    fn from_iter<I: IntoIterator<Item = (String, ValueRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Entity {
    type Item = (&'a String, &'a ValueRecord);
    type IntoIter = indexmap::map::Iter<'a, String, ValueRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Entity {
    type Item = (String, ValueRecord);
    type IntoIter = indexmap::map::IntoIter<String, ValueRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Consume-and-return form of [`Entity::rename_key`].
///
/// # Errors
///
/// Returns [`MergeError::KeyNotFound`] if `old_key` is absent.
pub fn rename_object_key(mut entity: Entity, old_key: &str, new_key: &str) -> MergeResult<Entity> {
    entity.rename_key(old_key, new_key)?;
    Ok(entity)
}
