//! Collision resolution against already-suffixed keys.
//!
//! A merged entity may already hold numbered variants of a key (`age` and
//! `age_1`). When another source then brings a plain `age`, it either repeats
//! the variant's value and is dropped, or it disagrees and is kept under a key
//! naming its source (`age_B`).

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::config::MergeConfig;
use crate::entity::Entity;
use crate::error::{MergeError, MergeResult};
use crate::key::parse_suffixed_key_with;

/// What happens to one key of the second entity.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Resolution {
    Delete { key: String },
    Rename { from: String, to: String },
}

/// Resolves collisions between `second` and the suffixed keys of `first`.
///
/// For each key `k` of `second` that matches the base of a suffixed key on
/// `first`, the record is removed when its `val` equals the suffixed
/// variant's, and renamed to `k_<apiSource>` otherwise. Keys with no matching
/// base are left alone. If several suffixed keys share a base, the last one
/// in `first`'s order is used.
///
/// # Errors
///
/// Returns [`MergeError::MissingApiSource`] if a record that needs renaming
/// has no source tag. Nothing is applied to `second` in that case.
///
/// # Examples
///
/// ```
/// use entity_merge::{resolve_duplicated_keys, Entity, ValueRecord};
///
/// let mut first = Entity::new();
/// first.insert("age_1", ValueRecord::new(30));
/// let mut second = Entity::new();
/// second.insert("age", ValueRecord::new(25).with_source("B"));
///
/// resolve_duplicated_keys(&first, &mut second)?;
/// assert_eq!(second.keys().collect::<Vec<_>>(), ["age_B"]);
/// # Ok::<(), entity_merge::MergeError>(())
/// ```
pub fn resolve_duplicated_keys(first: &Entity, second: &mut Entity) -> MergeResult<()> {
    resolve_duplicated_keys_with(&MergeConfig::default(), first, second)
}

/// Same as [`resolve_duplicated_keys`] with an explicit separator.
///
/// # Errors
///
/// Returns [`MergeError::MissingApiSource`] if a record that needs renaming
/// has no source tag.
pub fn resolve_duplicated_keys_with(
    config: &MergeConfig,
    first: &Entity,
    second: &mut Entity,
) -> MergeResult<()> {
    let plan = plan_resolutions(config, first, second)?;
    debug!(resolutions = plan.len(), "resolving duplicated keys");

    for resolution in plan {
        match resolution {
            Resolution::Delete { key } => {
                debug!(key = %key, "dropping key already present as a suffixed variant");
                second.remove(&key);
            }
            Resolution::Rename { from, to } => {
                debug!(from = %from, to = %to, "renaming diverging key by source");
                second.rename_key(&from, &to)?;
            }
        }
    }
    Ok(())
}

/// Consume-and-return form of [`resolve_duplicated_keys`].
///
/// # Errors
///
/// Returns [`MergeError::MissingApiSource`] if a record that needs renaming
/// has no source tag.
pub fn get_key_already_duplicated(first: &Entity, mut second: Entity) -> MergeResult<Entity> {
    resolve_duplicated_keys(first, &mut second)?;
    Ok(second)
}

fn suffixed_bases<'a>(config: &MergeConfig, first: &'a Entity) -> IndexMap<&'a str, &'a str> {
    let mut bases = IndexMap::new();
    for key in first.keys() {
        if let Some(parsed) = parse_suffixed_key_with(key, config.suffix_separator) {
            // Last write wins per base.
            bases.insert(parsed.base, parsed.key);
        }
    }
    bases
}

fn plan_resolutions(
    config: &MergeConfig,
    first: &Entity,
    second: &Entity,
) -> MergeResult<Vec<Resolution>> {
    let bases = suffixed_bases(config, first);
    trace!(bases = bases.len(), "collected suffixed bases");

    let mut plan = Vec::new();
    for (key, record) in second.iter() {
        let Some(variant_key) = bases.get(key) else {
            continue;
        };
        let duplicate = first
            .get(variant_key)
            .is_some_and(|variant| variant.same_val(record));

        if duplicate {
            plan.push(Resolution::Delete {
                key: key.to_string(),
            });
        } else {
            let source = record
                .api_source
                .as_ref()
                .ok_or_else(|| MergeError::missing_api_source(key))?;
            plan.push(Resolution::Rename {
                from: key.to_string(),
                to: config.suffixed(key, source.as_str()),
            });
        }
    }
    Ok(plan)
}
