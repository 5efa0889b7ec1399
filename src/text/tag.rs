use crate::text::constants::{MAX_PREFIX_LENGTH, MAX_TAG_LENGTH};
use crate::text::error::TagError;

/// Trim everything up to and including U+0020 from both ends
fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// Keep the trailing `max` chars of `value`
fn tail(value: &str, max: usize) -> &str {
    let count = value.chars().count();
    if count <= max {
        return value;
    }

    match value.char_indices().nth(count - max) {
        Some((start, _)) => &value[start..],
        None => value,
    }
}

/// True if the value is absent, empty or whitespace only
pub fn is_blank(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => trim(v).is_empty(),
    }
}

/// Compare two values, treating all blank values as equal.
///
/// When `first` is absent the comparison only succeeds if `second` is blank too.
pub fn text_equals(first: Option<&str>, second: Option<&str>) -> bool {
    if is_blank(first) && is_blank(second) {
        return true;
    }

    match first {
        Some(a) => second == Some(a),
        None => false,
    }
}

/// Build a log tag from an optional prefix and a class name.
///
/// A blank prefix is dropped. Otherwise the class name keeps only as many
/// trailing chars as fit behind the prefix within [`MAX_TAG_LENGTH`].
pub fn get_tag(prefix: Option<&str>, class_name: Option<&str>) -> Result<String, TagError> {
    let class_name = match class_name {
        Some(name) if !is_blank(Some(name)) => name,
        _ => return Err(TagError::InvalidArgument { name: "className" }),
    };

    let prefix = match prefix {
        Some(p) => {
            let length = p.chars().count();
            if length > MAX_PREFIX_LENGTH {
                return Err(TagError::OutOfRange { length, max: MAX_PREFIX_LENGTH });
            }
            p
        }
        None => return get_class_tag(class_name),
    };

    if is_blank(Some(prefix)) {
        return get_class_tag(class_name);
    }

    let budget = MAX_TAG_LENGTH - prefix.chars().count();
    let mut tag = String::with_capacity(MAX_TAG_LENGTH);
    tag.push_str(prefix);
    tag.push_str(tail(class_name, budget));
    Ok(tag)
}

/// Build a log tag from a class name alone, keeping its trailing chars
pub fn get_class_tag(class_name: &str) -> Result<String, TagError> {
    if is_blank(Some(class_name)) {
        return Err(TagError::InvalidArgument { name: "className" });
    }

    Ok(tail(class_name, MAX_TAG_LENGTH).to_string())
}

/// Build a log tag from the full path of `T`
pub fn get_type_tag<T: ?Sized>(prefix: Option<&str>) -> Result<String, TagError> {
    get_tag(prefix, Some(std::any::type_name::<T>()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::constants::EMPTY;
    use proptest::prelude::*;

    const LONG_CLASS_NAME: &str = "com.example.android.app.tests.utilities.SomeLongClassNameInIt";

    #[test]
    fn test_is_blank_with_absent_value() {
        assert!(is_blank(None));
    }

    #[test]
    fn test_is_blank_with_empty_values() {
        assert!(is_blank(Some("")));
        assert!(is_blank(Some(EMPTY)));
    }

    #[test]
    fn test_is_blank_with_whitespace() {
        for value in [" ", "\t", "\n", "\r", "\n\r", " \t\r\n "] {
            assert!(is_blank(Some(value)), "{:?} should be blank", value);
        }
    }

    #[test]
    fn test_is_blank_with_visible_chars() {
        for value in ["x", "9", "_", "-", " x "] {
            assert!(!is_blank(Some(value)), "{:?} should not be blank", value);
        }
    }

    #[test]
    fn test_text_equals_blank_values() {
        assert!(text_equals(None, None));
        assert!(text_equals(None, Some(EMPTY)));
        assert!(text_equals(Some(EMPTY), None));
        assert!(text_equals(Some(EMPTY), Some(EMPTY)));
        assert!(text_equals(Some("\n"), Some("\r\n")));
    }

    #[test]
    fn test_text_equals_equal_values() {
        let joined = format!("{}{}", "Test ", "VALUE");
        assert!(text_equals(Some("Test VALUE"), Some(&joined)));
    }

    #[test]
    fn test_text_equals_different_values() {
        assert!(!text_equals(None, Some("Test VALUE")));
        assert!(!text_equals(Some(EMPTY), Some("Test VALUE")));
        assert!(!text_equals(Some("Test VALUE"), Some("Test Value")));
        assert!(!text_equals(Some("Test VALUE"), None));
    }

    #[test]
    fn test_get_tag_rejects_blank_class_name() {
        let expected = Err(TagError::InvalidArgument { name: "className" });
        assert_eq!(get_tag(None, None), expected);
        assert_eq!(get_tag(None, Some("  \t")), expected);
        assert_eq!(get_tag(Some("MPX."), Some("")), expected);
        assert_eq!(get_class_tag("\n"), expected);
    }

    #[test]
    fn test_get_tag_blank_class_name_checked_before_prefix() {
        let result = get_tag(Some("MyLongPrefix"), None);
        assert_eq!(result, Err(TagError::InvalidArgument { name: "className" }));
    }

    #[test]
    fn test_get_class_tag_trims_long_class_name() {
        assert_eq!(LONG_CLASS_NAME.len(), 61);
        let tag = get_class_tag(LONG_CLASS_NAME).unwrap();
        assert_eq!(tag, "s.SomeLongClassNameInIt");
        assert_eq!(tag.chars().count(), MAX_TAG_LENGTH);
    }

    #[test]
    fn test_get_class_tag_keeps_short_class_name() {
        assert_eq!(get_class_tag("SomeShortClassName").unwrap(), "SomeShortClassName");
    }

    #[test]
    fn test_get_tag_absent_prefix_matches_class_tag() {
        assert_eq!(get_tag(None, Some(LONG_CLASS_NAME)), get_class_tag(LONG_CLASS_NAME));
    }

    #[test]
    fn test_get_tag_blank_prefix_is_dropped() {
        assert_eq!(get_tag(Some("   "), Some(LONG_CLASS_NAME)), get_class_tag(LONG_CLASS_NAME));
        assert_eq!(get_tag(Some(""), Some("Short")).unwrap(), "Short");
    }

    #[test]
    fn test_get_tag_rejects_long_prefix() {
        let result = get_tag(Some("MyLongPrefix"), Some(LONG_CLASS_NAME));
        assert_eq!(result, Err(TagError::OutOfRange { length: 12, max: MAX_PREFIX_LENGTH }));
    }

    #[test]
    fn test_get_tag_long_prefix_counted_untrimmed() {
        let result = get_tag(Some("  ab  "), Some("Short"));
        assert!(matches!(result, Err(TagError::OutOfRange { length: 6, .. })));
    }

    #[test]
    fn test_get_tag_with_prefix() {
        let tag = get_tag(Some("MPX."), Some(LONG_CLASS_NAME)).unwrap();
        assert_eq!(tag.chars().count(), MAX_TAG_LENGTH);
        assert!(tag.starts_with("MPX."));
        assert!(tag.ends_with("meLongClassNameInIt"));
    }

    #[test]
    fn test_get_tag_with_prefix_and_short_class_name() {
        assert_eq!(get_tag(Some("AB:"), Some("Main")).unwrap(), "AB:Main");
    }

    #[test]
    fn test_get_class_tag_counts_chars_not_bytes() {
        let name = "ä".repeat(30);
        let tag = get_class_tag(&name).unwrap();
        assert_eq!(tag.chars().count(), MAX_TAG_LENGTH);
    }

    #[test]
    fn test_get_type_tag_uses_type_path() {
        struct Marker;
        let tag = get_type_tag::<Marker>(Some("T:")).unwrap();
        assert!(tag.starts_with("T:"));
        assert!(tag.ends_with("Marker"));
        assert!(tag.chars().count() <= MAX_TAG_LENGTH);
    }

    proptest! {
        #[test]
        fn prop_tag_never_exceeds_limit(prefix in "[A-Z.]{0,5}", class_name in "[a-zA-Z.]{1,80}") {
            let tag = get_tag(Some(&prefix), Some(&class_name)).unwrap();
            prop_assert!(tag.chars().count() <= MAX_TAG_LENGTH);
            prop_assert!(tag.starts_with(&prefix));
        }

        #[test]
        fn prop_class_tag_is_fixed_point(class_name in "[a-zA-Z.]{1,80}") {
            let once = get_class_tag(&class_name).unwrap();
            let twice = get_class_tag(&once).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
