//! String helpers for the accessory quick-add buttons.
//!
//! The accessories field stays plain text; it is only parsed transiently for
//! the containment check.

use crate::constants::TAG_SEPARATOR;

/// Check whether `tag` already occurs among the comma-separated tokens of
/// `field`, case-insensitively and ignoring surrounding whitespace.
pub fn contains_tag(field: &str, tag: &str) -> bool {
    let needle = tag.trim().to_lowercase();
    field
        .split(',')
        .any(|token| token.trim().to_lowercase() == needle)
}

/// Append `tag` to a comma-separated text field unless it is already present.
///
/// A non-empty field gets `", "` before the new tag. Returns the new field
/// value; an already-present tag leaves the field untouched.
pub fn append_tag_if_absent(field: &str, tag: &str) -> String {
    let tag = tag.trim();
    if tag.is_empty() || contains_tag(field, tag) {
        return field.to_string();
    }
    if field.trim().is_empty() {
        tag.to_string()
    } else {
        format!("{field}{TAG_SEPARATOR}{tag}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_to_empty_field() {
        assert_eq!(append_tag_if_absent("", "Зарядка"), "Зарядка");
    }

    #[test]
    fn test_append_with_separator() {
        assert_eq!(
            append_tag_if_absent("Зарядка", "Сумка"),
            "Зарядка, Сумка"
        );
    }

    #[test]
    fn test_duplicate_is_case_insensitive() {
        let field = "Зарядка, Сумка";
        assert_eq!(append_tag_if_absent(field, "сумка"), field);
        assert_eq!(append_tag_if_absent(field, " СУМКА "), field);
    }

    #[test]
    fn test_double_append_keeps_one_occurrence() {
        let once = append_tag_if_absent("", "Mouse");
        let twice = append_tag_if_absent(&once, "mouse");
        assert_eq!(twice, "Mouse");
    }

    #[test]
    fn test_containment_splits_on_commas() {
        assert!(contains_tag("a, b,c", "B"));
        assert!(!contains_tag("ab, c", "a"));
        assert!(!contains_tag("", "a"));
    }
}
