//! The `base_suffix` duplicate-key convention.
//!
//! When a key already exists on an entity, an alternate version from another
//! source is stored as `base` + separator + numeric suffix (`age_1`). This is
//! a naming protocol, not a schema, so parsing follows the literal rule: split
//! on the separator, take the first segment as the base, and require the
//! second segment to be numeric. Anything after the second segment is ignored.

/// A key recognised as a numbered variant of a base key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixedKey<'a> {
    /// The full key as it appears on the entity.
    pub key: &'a str,
    /// Text before the first separator. May be empty.
    pub base: &'a str,
    /// The numeric second segment.
    pub suffix: &'a str,
}

/// Parses a key using the default `_` separator.
///
/// # Examples
///
/// ```
/// use entity_merge::parse_suffixed_key;
///
/// let parsed = parse_suffixed_key("age_1").unwrap();
/// assert_eq!(parsed.base, "age");
/// assert_eq!(parsed.suffix, "1");
///
/// assert!(parse_suffixed_key("age").is_none());
/// assert!(parse_suffixed_key("age_B").is_none());
/// ```
#[must_use]
pub fn parse_suffixed_key(key: &str) -> Option<SuffixedKey<'_>> {
    parse_suffixed_key_with(key, '_')
}

/// Parses a key using an explicit separator.
#[must_use]
pub fn parse_suffixed_key_with(key: &str, separator: char) -> Option<SuffixedKey<'_>> {
    let mut segments = key.split(separator);
    let base = segments.next()?;
    let suffix = segments.next()?;
    is_numeric(suffix).then_some(SuffixedKey { key, base, suffix })
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_suffix() {
        let parsed = parse_suffixed_key("age_12").unwrap();
        assert_eq!(parsed.key, "age_12");
        assert_eq!(parsed.base, "age");
        assert_eq!(parsed.suffix, "12");
    }

    #[test]
    fn test_empty_base_is_valid() {
        let parsed = parse_suffixed_key("_1").unwrap();
        assert_eq!(parsed.base, "");
    }

    #[test]
    fn test_numeric_base() {
        let parsed = parse_suffixed_key("0_1").unwrap();
        assert_eq!(parsed.base, "0");
    }

    #[test]
    fn test_only_second_segment_is_checked() {
        // Second segment "b" is not numeric, so the trailing "1" does not count.
        assert!(parse_suffixed_key("a_b_1").is_none());

        let parsed = parse_suffixed_key("a_1_x").unwrap();
        assert_eq!(parsed.base, "a");
        assert_eq!(parsed.suffix, "1");
        assert_eq!(parsed.key, "a_1_x");
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(parse_suffixed_key("age").is_none());
        assert!(parse_suffixed_key("age_").is_none());
        assert!(parse_suffixed_key("age_B").is_none());
        assert!(parse_suffixed_key("age_-1").is_none());
        assert!(parse_suffixed_key("age_1.5").is_none());
    }

    #[test]
    fn test_custom_separator() {
        let parsed = parse_suffixed_key_with("age-3", '-').unwrap();
        assert_eq!(parsed.base, "age");
        assert!(parse_suffixed_key_with("age_3", '-').is_none());
    }
}
