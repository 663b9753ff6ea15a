//! Source tags for records.
//!
//! When several APIs describe the same object, each record remembers which
//! one produced it. The tag is read-only metadata: it is never compared, only
//! used to build a disambiguated key when two sources disagree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the data source a value came from (the `apiSource` field).
///
/// # Examples
///
/// ```
/// use entity_merge::ApiSource;
///
/// let source = ApiSource::new("haystack");
/// assert_eq!(source.as_str(), "haystack");
/// assert_eq!(source.to_string(), "haystack");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiSource(String);

impl ApiSource {
    /// Creates a source tag.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ApiSource {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ApiSource {
    fn from(name: String) -> Self {
        Self(name)
    }
}
