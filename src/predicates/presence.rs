//! Presence checks.

/// A value is blank when it holds nothing but whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn not_blank(value: &str) -> bool {
    !is_blank(value)
}

/// Passes when `value` is filled or every sibling is blank.
///
/// Used for groups such as an address block where one filled member makes
/// the rest mandatory.
pub fn required_unless_siblings_blank<S: AsRef<str>>(value: &str, siblings: &[S]) -> bool {
    not_blank(value) || siblings.iter().all(|s| is_blank(s.as_ref()))
}

/// Confirmation check. With `blank_ok` a blank confirmation passes.
pub fn values_match(value: &str, other: &str, blank_ok: bool) -> bool {
    (blank_ok && is_blank(value)) || value == other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(not_blank(" x "));
    }

    #[test]
    fn siblings_make_value_required() {
        assert!(required_unless_siblings_blank("", &["", " "]));
        assert!(!required_unless_siblings_blank("", &["", "Main St"]));
        assert!(required_unless_siblings_blank("12345", &["Main St"]));
        assert!(required_unless_siblings_blank::<&str>("", &[]));
    }

    #[test]
    fn match_respects_blank_tolerance() {
        assert!(values_match("secret", "secret", false));
        assert!(!values_match("secret", "Secret", false));
        assert!(values_match("", "secret", true));
        assert!(!values_match("", "secret", false));
    }
}
