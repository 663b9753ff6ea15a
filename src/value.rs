//! Value types carried in a record's `val` field.
//!
//! A `val` is the only part of a record that is compared when two entities
//! are diffed. On the wire it is a bare JSON value, so the enum is untagged.

use serde::{Deserialize, Serialize};

/// The payload of a [`ValueRecord`](crate::ValueRecord).
///
/// Equality follows the value, not the variant: every number compares by
/// numeric value (`Int(30) == Float(30.0)`), and a JSON scalar held in
/// `Structured` equals the matching primitive. `NaN` equals nothing.
///
/// # Examples
///
/// ```
/// use entity_merge::Value;
///
/// assert_eq!(Value::Int(30), Value::Float(30.0));
/// assert_eq!(Value::from(serde_json::json!(30)), Value::Int(30));
/// assert_ne!(Value::from("30"), Value::Int(30));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent or JSON `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integral number.
    Int(i64),
    /// A non-integral (or out of `i64` range) number.
    Float(f64),
    /// A string.
    String(String),
    /// Lists and dicts.
    Structured(serde_json::Value),
}

impl Value {
    /// Returns true for `Null` and a structured JSON `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(
            self,
            Self::Null | Self::Structured(serde_json::Value::Null)
        )
    }

    /// Boolean view, looking through `Structured`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) | Self::Structured(serde_json::Value::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// Integer view, looking through `Structured`. Floats are not truncated.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Structured(serde_json::Value::Number(n)) => n.as_i64(),
            _ => None,
        }
    }

    /// Numeric view of any number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            Self::Structured(serde_json::Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }

    /// String view, looking through `Structured`.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(v) | Self::Structured(serde_json::Value::String(v)) => Some(v),
            _ => None,
        }
    }

    /// Returns the bare JSON form of this value.
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(v) => serde_json::Value::Bool(*v),
            Self::Int(v) => serde_json::Value::from(*v),
            Self::Float(v) => serde_json::Number::from_f64(*v)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::String(v) => serde_json::Value::String(v.clone()),
            Self::Structured(v) => v.clone(),
        }
    }
}

impl PartialEq for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        // Exact integer comparison first so large i64 values keep precision.
        if let (Some(a), Some(b)) = (self.as_int(), other.as_int()) {
            return a == b;
        }
        if let (Some(a), Some(b)) = (self.as_float(), other.as_float()) {
            return a == b;
        }
        if let (Some(a), Some(b)) = (self.as_bool(), other.as_bool()) {
            return a == b;
        }
        if let (Some(a), Some(b)) = (self.as_string(), other.as_string()) {
            return a == b;
        }
        if self.is_null() || other.is_null() {
            return self.is_null() && other.is_null();
        }
        match (self, other) {
            (Self::Structured(a), Self::Structured(b)) => a == b,
            _ => false,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

/// JSON scalars land in the matching primitive variant; only lists and
/// dicts stay `Structured`.
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => n.as_f64().map_or(Self::Null, Self::Float),
            },
            serde_json::Value::String(s) => Self::String(s),
            other => Self::Structured(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(Value::Int(30), Value::Float(30.0));
        assert_eq!(Value::Float(30.0), Value::Int(30));
        assert_ne!(Value::Int(30), Value::Float(30.5));
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn test_large_ints_compare_exactly() {
        assert_ne!(Value::Int(i64::MAX), Value::Int(i64::MAX - 1));
    }

    #[test]
    fn test_structured_scalars_equal_primitives() {
        assert_eq!(Value::Structured(json!(30)), Value::Int(30));
        assert_eq!(Value::Structured(json!(30.0)), Value::Int(30));
        assert_eq!(Value::Structured(json!("a")), Value::from("a"));
        assert_eq!(Value::Structured(json!(true)), Value::Bool(true));
        assert_eq!(Value::Structured(json!(null)), Value::Null);
    }

    #[test]
    fn test_kinds_do_not_mix() {
        assert_ne!(Value::from("30"), Value::Int(30));
        assert_ne!(Value::Bool(true), Value::Int(1));
        assert_ne!(Value::Null, Value::Int(0));
        assert_ne!(Value::Structured(json!([30])), Value::Int(30));
    }

    #[test]
    fn test_from_json_unwraps_scalars() {
        assert!(matches!(Value::from(json!(30)), Value::Int(30)));
        assert!(matches!(Value::from(json!(2.5)), Value::Float(f) if (f - 2.5).abs() < f64::EPSILON));
        assert!(matches!(Value::from(json!("s")), Value::String(ref s) if s == "s"));
        assert!(matches!(Value::from(json!(null)), Value::Null));
        assert!(matches!(Value::from(json!({"a": 1})), Value::Structured(_)));
    }

    #[test]
    fn test_value_deserializes_bare_json() {
        let val: Value = serde_json::from_str("30").unwrap();
        assert!(matches!(val, Value::Int(30)));

        let val: Value = serde_json::from_str("21.5").unwrap();
        assert!(matches!(val, Value::Float(_)));

        let val: Value = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(val, Value::Structured(json!([1, 2])));
    }

    #[test]
    fn test_value_to_json() {
        assert_eq!(Value::Int(30).to_json(), json!(30));
        assert_eq!(Value::Bool(false).to_json(), json!(false));
        assert_eq!(Value::Float(f64::NAN).to_json(), serde_json::Value::Null);
        assert_eq!(Value::Structured(json!({"a": 1})).to_json(), json!({"a": 1}));
    }
}
