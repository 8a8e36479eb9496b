//! Length, character-class and containment checks.

/// Character count within `min..=max`.
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    debug_assert!(min <= max, "length bounds inverted: {min} > {max}");
    (min..=max).contains(&value.chars().count())
}

pub fn length_equals(value: &str, len: usize) -> bool {
    value.chars().count() == len
}

pub fn has_uppercase(value: &str) -> bool {
    value.chars().any(char::is_uppercase)
}

pub fn has_lowercase(value: &str) -> bool {
    value.chars().any(char::is_lowercase)
}

pub fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

/// Passes unless `value` contains `needle`.
///
/// Containment is one-directional: only `value` is searched. A blank
/// needle never matches.
pub fn not_contains(value: &str, needle: &str) -> bool {
    needle.trim().is_empty() || !value.contains(needle)
}
