//! Format checks.

use super::presence::is_blank;
use regex::Regex;
use std::sync::LazyLock;

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-?[0-9]{3}-?[0-9]{4}$").expect("phone pattern is valid"));

static SSN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-?[0-9]{2}-?[0-9]{4}$").expect("ssn pattern is valid"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Apply blank tolerance to an already-computed format outcome.
///
/// With `error_on_blank` unset a blank value passes regardless of
/// `outcome`.
pub fn tolerate_blank(value: &str, error_on_blank: bool, outcome: bool) -> bool {
    if is_blank(value) && !error_on_blank {
        return true;
    }
    outcome
}

pub fn numeric_only(value: &str, error_on_blank: bool) -> bool {
    let digits = !value.is_empty() && value.chars().all(|c| c.is_ascii_digit());
    tolerate_blank(value, error_on_blank, digits)
}

pub fn alphanumeric_only(value: &str, error_on_blank: bool) -> bool {
    let alnum = !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric());
    tolerate_blank(value, error_on_blank, alnum)
}

/// `NNN-NNN-NNNN` with optional dashes.
pub fn phone_format(value: &str, error_on_blank: bool) -> bool {
    tolerate_blank(value, error_on_blank, PHONE.is_match(value))
}

/// `NNN-NN-NNNN` with optional dashes.
pub fn ssn_format(value: &str, error_on_blank: bool) -> bool {
    tolerate_blank(value, error_on_blank, SSN.is_match(value))
}

pub fn email_format(value: &str, error_on_blank: bool) -> bool {
    tolerate_blank(value, error_on_blank, EMAIL.is_match(value))
}

/// Rejects values whose digits are all the same, such as `111-111-1111`.
///
/// Values without digits pass; the format rule is responsible for them.
pub fn varied_digits(value: &str, error_on_blank: bool) -> bool {
    let mut digits = value.chars().filter(char::is_ascii_digit);
    let varied = match digits.next() {
        Some(first) => digits.any(|d| d != first),
        None => !is_blank(value),
    };
    tolerate_blank(value, error_on_blank, varied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_passes_only_when_tolerated() {
        assert!(numeric_only("", false));
        assert!(!numeric_only("", true));
        assert!(phone_format("  ", false));
        assert!(!phone_format("", true));
        assert!(varied_digits("", false));
        assert!(!varied_digits("", true));
    }

    #[test]
    fn numeric_and_alphanumeric() {
        assert!(numeric_only("02134", true));
        assert!(!numeric_only("0213a", true));
        assert!(alphanumeric_only("AB12", true));
        assert!(!alphanumeric_only("AB-2", true));
    }

    #[test]
    fn phone_accepts_optional_dashes() {
        assert!(phone_format("617-555-0134", true));
        assert!(phone_format("6175550134", true));
        assert!(phone_format("617555-0134", true));
        assert!(!phone_format("617-555-013", true));
        assert!(!phone_format("(617) 555-0134", true));
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        let arabic_indic_phone = "\u{666}\u{661}\u{667}-\u{665}\u{665}\u{665}-\u{660}\u{661}\u{663}\u{664}";
        let arabic_indic_ssn = "\u{661}\u{662}\u{663}-\u{664}\u{665}-\u{666}\u{667}\u{668}\u{669}";

        assert!(!phone_format(arabic_indic_phone, true));
        assert!(!ssn_format(arabic_indic_ssn, true));
        assert!(!phone_format("\u{ff16}17-555-0134", true));
    }

    #[test]
    fn repeated_digits_are_rejected() {
        assert!(!varied_digits("111-111-1111", true));
        assert!(varied_digits("111-111-1112", true));
    }

    #[test]
    fn ssn_format_checks_groups() {
        assert!(ssn_format("123-45-6789", true));
        assert!(ssn_format("123456789", true));
        assert!(!ssn_format("12-345-6789", true));
    }

    #[test]
    fn email_format_is_light() {
        assert!(email_format("jo@example.com", true));
        assert!(!email_format("jo@example", true));
        assert!(!email_format("jo example@x.io", true));
    }
}
