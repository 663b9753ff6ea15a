//! Haystack JSON output.
//!
//! [`format_haystack_json`] strips records down to their bare values, which
//! is what callers hand to the Haystack layer. [`dump_grid`] goes one step
//! further and writes a Haystack 3.0 JSON grid with encoded scalars.

use indexmap::IndexSet;
use serde_json::{json, Map, Value as JsonValue};
use tracing::debug;

use crate::entity::Entity;
use crate::error::MergeResult;
use crate::value::Value;

/// Grid version written in the `meta.ver` field.
pub const GRID_VERSION: &str = "3.0";

/// Replaces every record by its bare `val`.
///
/// `apiSource` and any other record metadata are dropped. Entity order and
/// each entity's key order are preserved; the input is left untouched.
///
/// # Examples
///
/// ```
/// use entity_merge::{format_haystack_json, Entity, ValueRecord};
///
/// let mut entity = Entity::new();
/// entity.insert("age", ValueRecord::new(30).with_source("A"));
///
/// let rows = format_haystack_json(&[entity]);
/// assert_eq!(rows[0]["age"], serde_json::json!(30));
/// ```
#[must_use]
pub fn format_haystack_json(entities: &[Entity]) -> Vec<Map<String, JsonValue>> {
    entities
        .iter()
        .map(|entity| {
            entity
                .iter()
                .map(|(key, record)| (key.to_string(), record.val.to_json()))
                .collect()
        })
        .collect()
}

/// Encodes a value as a Haystack 3.0 JSON scalar.
///
/// Strings become `s:<text>` and numbers `n:<value>` with six decimals
/// (`n:NaN`, `n:INF` and `n:-INF` for non-finite floats).
/// Booleans and null stay bare. Lists and dicts are encoded element-wise.
#[must_use]
pub fn encode_scalar(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(v) => JsonValue::Bool(*v),
        #[allow(clippy::cast_precision_loss)]
        Value::Int(v) => encode_number(*v as f64),
        Value::Float(v) => encode_number(*v),
        Value::String(v) => encode_str(v),
        Value::Structured(v) => encode_json(v),
    }
}

fn encode_number(number: f64) -> JsonValue {
    let text = if number.is_nan() {
        "n:NaN".to_string()
    } else if number.is_infinite() {
        if number > 0.0 { "n:INF" } else { "n:-INF" }.to_string()
    } else {
        format!("n:{number:.6}")
    };
    JsonValue::String(text)
}

fn encode_str(text: &str) -> JsonValue {
    JsonValue::String(format!("s:{text}"))
}

fn encode_json(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Null => JsonValue::Null,
        JsonValue::Bool(v) => JsonValue::Bool(*v),
        JsonValue::Number(n) => n.as_f64().map_or(JsonValue::Null, encode_number),
        JsonValue::String(s) => encode_str(s),
        JsonValue::Array(items) => JsonValue::Array(items.iter().map(encode_json).collect()),
        JsonValue::Object(fields) => JsonValue::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), encode_json(v)))
                .collect(),
        ),
    }
}

/// Writes entities as a Haystack JSON grid.
///
/// Columns are the union of all entity keys in first-seen order. Each row
/// only carries the columns its entity has, in column order.
#[must_use]
pub fn dump_grid(entities: &[Entity]) -> JsonValue {
    let columns: IndexSet<&str> = entities.iter().flat_map(Entity::keys).collect();
    debug!(
        rows = entities.len(),
        cols = columns.len(),
        "dumping haystack grid"
    );

    let cols: Vec<JsonValue> = columns.iter().map(|name| json!({ "name": name })).collect();
    let rows: Vec<JsonValue> = entities
        .iter()
        .map(|entity| {
            let row: Map<String, JsonValue> = columns
                .iter()
                .filter_map(|col| {
                    entity
                        .get(col)
                        .map(|record| ((*col).to_string(), encode_scalar(&record.val)))
                })
                .collect();
            JsonValue::Object(row)
        })
        .collect();

    json!({
        "meta": { "ver": GRID_VERSION },
        "cols": cols,
        "rows": rows,
    })
}

/// Serialized form of [`dump_grid`].
///
/// # Errors
///
/// Returns [`MergeError::Serialization`](crate::MergeError::Serialization)
/// if the grid cannot be written.
pub fn dump_grid_string(entities: &[Entity]) -> MergeResult<String> {
    Ok(serde_json::to_string(&dump_grid(entities))?)
}
