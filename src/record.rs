//! The record wrapped around every entity value.

use serde::{Deserialize, Serialize};

use crate::source::ApiSource;
use crate::value::Value;

/// A value plus the metadata describing where it came from.
///
/// On the wire this is `{"val": ..., "apiSource": "...", ...}`. Any other
/// fields are preserved in [`extra`](Self::extra) so copies and renames carry
/// them along untouched.
///
/// # Examples
///
/// ```
/// use entity_merge::{ValueRecord, Value};
///
/// let record = ValueRecord::new(30).with_source("A");
/// assert_eq!(record.val, Value::Int(30));
/// assert_eq!(record.api_source.as_ref().map(|s| s.as_str()), Some("A"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRecord {
    /// Compared payload. Absent on the wire means `null`.
    #[serde(default)]
    pub val: Value,

    /// Source that produced `val`. Never compared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_source: Option<ApiSource>,

    /// Any other metadata fields, in order.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ValueRecord {
    /// Creates a record with no source tag.
    #[must_use]
    pub fn new(val: impl Into<Value>) -> Self {
        Self {
            val: val.into(),
            api_source: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Sets the source tag.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<ApiSource>) -> Self {
        self.api_source = Some(source.into());
        self
    }

    /// Attaches an extra metadata field.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Returns true when both records hold the same `val`.
    #[must_use]
    pub fn same_val(&self, other: &Self) -> bool {
        self.val == other.val
    }
}
