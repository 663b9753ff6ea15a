//! # entity-merge
//!
//! Helpers for reconciling key/value records that describe the same logical
//! object but come from several data sources.
//!
//! ## Core Concepts
//!
//! - **Entity**: an ordered map from attribute key to [`ValueRecord`]
//! - **ValueRecord**: a `val` plus the `apiSource` that produced it
//! - **Suffixed key**: `base_N`, an alternate value for `base` kept from another source
//!
//! ## Usage
//!
//! ```rust
//! use entity_merge::{
//!     find_keys_with_different_values, format_haystack_json, resolve_duplicated_keys, Entity,
//! };
//!
//! let merged = Entity::from_json_str(r#"{
//!     "id":    {"val": "r:1", "apiSource": "A"},
//!     "age":   {"val": 30,    "apiSource": "A"},
//!     "age_1": {"val": 31,    "apiSource": "C"}
//! }"#)?;
//! let mut incoming = Entity::from_json_str(r#"{
//!     "id":  {"val": "r:1", "apiSource": "B"},
//!     "age": {"val": 25,    "apiSource": "B"}
//! }"#)?;
//!
//! assert_eq!(find_keys_with_different_values(&merged, &incoming), ["age"]);
//!
//! resolve_duplicated_keys(&merged, &mut incoming)?;
//! assert!(incoming.contains_key("age_B"));
//!
//! let rows = format_haystack_json(&[merged, incoming]);
//! assert_eq!(rows[1]["age_B"], serde_json::json!(25));
//! # Ok::<(), entity_merge::MergeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod copy;
pub mod diff;
pub mod duplicate;
pub mod entity;
pub mod error;
pub mod haystack;
pub mod key;
pub mod merger;
pub mod record;
pub mod source;
pub mod value;

pub use config::MergeConfig;
pub use copy::{copy_nested, copy_nested_records};
pub use diff::{
    find_keys_with_different_values, find_keys_with_same_values, find_keys_with_same_values_with,
};
pub use duplicate::{get_key_already_duplicated, resolve_duplicated_keys, resolve_duplicated_keys_with};
pub use entity::{rename_object_key, Entity};
pub use error::{MergeError, MergeResult};
pub use haystack::{dump_grid, dump_grid_string, encode_scalar, format_haystack_json};
pub use key::{parse_suffixed_key, parse_suffixed_key_with, SuffixedKey};
pub use merger::RecordMerger;
pub use record::ValueRecord;
pub use source::ApiSource;
pub use value::Value;
