//! Copies of nested record batches.

use crate::record::ValueRecord;

/// Copies a batch of record lists into fresh containers.
///
/// Both levels are newly allocated and every record is cloned, so editing the
/// copy never reaches the input. Order is preserved at both levels.
///
/// # Examples
///
/// ```
/// use entity_merge::{copy_nested_records, Value, ValueRecord};
///
/// let input = vec![vec![ValueRecord::new(1).with_source("A")]];
/// let mut copy = copy_nested_records(&input);
/// copy[0][0].val = Value::Int(2);
///
/// assert_eq!(input[0][0].val, Value::Int(1));
/// ```
#[must_use]
pub fn copy_nested_records(batches: &[Vec<ValueRecord>]) -> Vec<Vec<ValueRecord>> {
    copy_nested(batches)
}

/// Generic form of [`copy_nested_records`] for any cloneable item.
#[must_use]
pub fn copy_nested<T: Clone>(batches: &[Vec<T>]) -> Vec<Vec<T>> {
    batches.iter().map(|inner| inner.to_vec()).collect()
}
