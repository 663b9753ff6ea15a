//! Error types for entity merging.
//!
//! The merge helpers assume well-formed input, so the taxonomy is small:
//! a key that should exist does not, a record that must carry a source tag
//! does not, or a JSON document could not be read or written.

use thiserror::Error;

/// Errors produced by the merge helpers.
#[derive(Debug, Error)]
pub enum MergeError {
    /// A rename targeted a key the entity does not have.
    #[error("Key '{key}' not found on entity")]
    KeyNotFound {
        /// The missing key.
        key: String,
    },

    /// A diverging record needed its source tag to be renamed.
    #[error("Record at key '{key}' has no apiSource to disambiguate it")]
    MissingApiSource {
        /// Key of the record without a source tag.
        key: String,
    },

    /// A JSON document could not be read or written.
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MergeError {
    /// Creates a key-not-found error.
    #[must_use]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Creates a missing-source error.
    #[must_use]
    pub fn missing_api_source(key: impl Into<String>) -> Self {
        Self::MissingApiSource { key: key.into() }
    }

    /// Returns true if this is a key-not-found error.
    #[must_use]
    pub const fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }

    /// Returns true if this is a missing-source error.
    #[must_use]
    pub const fn is_missing_api_source(&self) -> bool {
        matches!(self, Self::MissingApiSource { .. })
    }

    /// Returns true if this is a serialization error.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }
}

/// Result type alias for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;
