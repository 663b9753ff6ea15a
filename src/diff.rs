//! Key-level comparison of two entities.
//!
//! Both comparators walk the first entity's keys in order and test membership
//! on the second entity directly. Only `val` is compared.

use crate::config::MergeConfig;
use crate::entity::Entity;
use crate::record::ValueRecord;

/// Keys present on both entities with equal `val`, skipping `id`.
///
/// # Examples
///
/// ```
/// use entity_merge::{find_keys_with_same_values, Entity, ValueRecord};
///
/// let mut a = Entity::new();
/// a.insert("id", ValueRecord::new("r:1"));
/// a.insert("age", ValueRecord::new(30).with_source("A"));
/// let mut b = Entity::new();
/// b.insert("id", ValueRecord::new("r:1"));
/// b.insert("age", ValueRecord::new(30).with_source("B"));
///
/// assert_eq!(find_keys_with_same_values(&a, &b), ["age"]);
/// ```
#[must_use]
pub fn find_keys_with_same_values(first: &Entity, second: &Entity) -> Vec<String> {
    find_keys_with_same_values_with(&MergeConfig::default(), first, second)
}

/// Same as [`find_keys_with_same_values`] with an explicit identity key.
#[must_use]
pub fn find_keys_with_same_values_with(
    config: &MergeConfig,
    first: &Entity,
    second: &Entity,
) -> Vec<String> {
    shared_keys_where(first, second, |key, a, b| {
        key != config.identity_key && a.same_val(b)
    })
}

/// Keys present on both entities whose `val` differs.
///
/// Unlike [`find_keys_with_same_values`], the identity key is not skipped.
#[must_use]
pub fn find_keys_with_different_values(first: &Entity, second: &Entity) -> Vec<String> {
    shared_keys_where(first, second, |_, a, b| !a.same_val(b))
}

fn shared_keys_where<F>(first: &Entity, second: &Entity, keep: F) -> Vec<String>
where
    F: Fn(&str, &ValueRecord, &ValueRecord) -> bool,
{
    first
        .iter()
        .filter_map(|(key, record)| {
            let other = second.get(key)?;
            keep(key, record, other).then(|| key.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entity(value: serde_json::Value) -> Entity {
        Entity::from_json(value).unwrap()
    }

    #[test]
    fn test_same_values_follow_first_entity_order() {
        let a = entity(json!({
            "dis": {"val": "Site"},
            "area": {"val": 120},
            "geoCity": {"val": "Lyon"}
        }));
        let b = entity(json!({
            "geoCity": {"val": "Lyon"},
            "dis": {"val": "Site"},
            "area": {"val": 121}
        }));

        assert_eq!(find_keys_with_same_values(&a, &b), ["dis", "geoCity"]);
        assert_eq!(find_keys_with_different_values(&a, &b), ["area"]);
    }

    #[test]
    fn test_identity_key_only_skipped_for_same_values() {
        let a = entity(json!({"id": {"val": "r:1"}, "tz": {"val": "Paris"}}));
        let same = entity(json!({"id": {"val": "r:1"}, "tz": {"val": "Paris"}}));
        let different = entity(json!({"id": {"val": "r:2"}, "tz": {"val": "Paris"}}));

        assert_eq!(find_keys_with_same_values(&a, &same), ["tz"]);
        assert_eq!(find_keys_with_different_values(&a, &different), ["id"]);
    }

    #[test]
    fn test_keys_missing_on_either_side_are_ignored() {
        let a = entity(json!({"only_a": {"val": 1}, "both": {"val": 2}}));
        let b = entity(json!({"only_b": {"val": 1}, "both": {"val": 2}}));

        assert_eq!(find_keys_with_same_values(&a, &b), ["both"]);
        assert!(find_keys_with_different_values(&a, &b).is_empty());
    }

    #[test]
    fn test_source_tag_is_not_compared() {
        let a = entity(json!({"age": {"val": 30, "apiSource": "A"}}));
        let b = entity(json!({"age": {"val": 30, "apiSource": "B"}}));
        assert_eq!(find_keys_with_same_values(&a, &b), ["age"]);
    }

    #[test]
    fn test_missing_vals_compare_equal() {
        let a = entity(json!({"x": {"apiSource": "A"}}));
        let b = entity(json!({"x": {"apiSource": "B"}}));
        assert_eq!(find_keys_with_same_values(&a, &b), ["x"]);
    }

    #[test]
    fn test_int_and_float_forms_compare_equal() {
        let a = entity(json!({"area": {"val": 30}, "temp": {"val": 20.5}}));
        let b = entity(json!({"area": {"val": 30.0}, "temp": {"val": 20.0}}));

        assert_eq!(find_keys_with_same_values(&a, &b), ["area"]);
        assert_eq!(find_keys_with_different_values(&a, &b), ["temp"]);
    }

    #[test]
    fn test_json_built_records_match_primitive_records() {
        let mut a = Entity::new();
        a.insert("x", ValueRecord::new(json!(30)));
        a.insert("on", ValueRecord::new(json!(true)));
        a.insert("dis", ValueRecord::new(json!("Site")));
        let mut b = Entity::new();
        b.insert("x", ValueRecord::new(30));
        b.insert("on", ValueRecord::new(true));
        b.insert("dis", ValueRecord::new("Site"));

        assert_eq!(find_keys_with_same_values(&a, &b), ["x", "on", "dis"]);
        assert!(find_keys_with_different_values(&a, &b).is_empty());
    }

    #[test]
    fn test_number_and_string_forms_differ() {
        let a = entity(json!({"x": {"val": 30}}));
        let b = entity(json!({"x": {"val": "30"}}));
        assert_eq!(find_keys_with_different_values(&a, &b), ["x"]);
    }

    #[test]
    fn test_custom_identity_key() {
        let config = MergeConfig::default().with_identity_key("ref");
        let a = entity(json!({"id": {"val": 1}, "ref": {"val": 2}}));
        let b = a.clone();
        assert_eq!(find_keys_with_same_values_with(&config, &a, &b), ["id"]);
    }

    #[test]
    fn test_empty_entities() {
        let empty = Entity::new();
        let a = entity(json!({"x": {"val": 1}}));
        assert!(find_keys_with_same_values(&empty, &a).is_empty());
        assert!(find_keys_with_different_values(&a, &empty).is_empty());
    }
}
