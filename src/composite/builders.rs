//! Composite rule sets, one function per field kind.
//!
//! Values are passed in on every call. Multi-field composites take the
//! linked field's value as it stands at call time; nothing is cached.

use super::{Composite, FieldOptions};
use crate::config::Messages;
use crate::core::{Rule, RuleSet};
use crate::predicates::{
    alphanumeric_only, email_format, has_digit, has_lowercase, has_uppercase, length_between,
    length_equals, not_blank, not_contains, numeric_only, phone_format,
    required_unless_siblings_blank, ssn_format, tolerate_blank, values_match, varied_digits,
};

const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 128;
const ANSWER_MIN: usize = 4;
const ANSWER_MAX: usize = 512;

fn with_required(composite: Composite, value: &str, opts: FieldOptions, m: &Messages) -> Composite {
    composite.stage_if(opts.required, vec![not_blank(value)], &m.required)
}

pub fn required(value: &str, m: &Messages) -> Composite {
    Composite::new().stage(vec![not_blank(value)], &m.required)
}

/// Required when at least one sibling is filled.
pub fn required_if_siblings_filled<S: AsRef<str>>(
    value: &str,
    siblings: &[S],
    m: &Messages,
) -> Composite {
    Composite::new().stage(
        vec![required_unless_siblings_blank(value, siblings)],
        &m.required,
    )
}

pub fn zip(value: &str, opts: FieldOptions, m: &Messages) -> Composite {
    let format = vec![
        numeric_only(value, opts.error_on_blank),
        tolerate_blank(value, opts.error_on_blank, length_equals(value, 5)),
    ];
    with_required(Composite::new().stage(format, &m.zip), value, opts, m)
}

/// Zip inside an address group: required once any sibling is filled.
pub fn zip_group<S: AsRef<str>>(
    value: &str,
    siblings: &[S],
    opts: FieldOptions,
    m: &Messages,
) -> Composite {
    zip(value, opts, m).stage(
        vec![required_unless_siblings_blank(value, siblings)],
        &m.required,
    )
}

pub fn phone(value: &str, opts: FieldOptions, m: &Messages) -> Composite {
    let format = vec![
        phone_format(value, opts.error_on_blank),
        varied_digits(value, opts.error_on_blank),
    ];
    with_required(Composite::new().stage(format, &m.phone), value, opts, m)
}

pub fn email(value: &str, opts: FieldOptions, m: &Messages) -> Composite {
    let format = vec![email_format(value, opts.error_on_blank)];
    with_required(Composite::new().stage(format, &m.email), value, opts, m)
}

pub fn ssn(value: &str, opts: FieldOptions, m: &Messages) -> Composite {
    let format = vec![ssn_format(value, opts.error_on_blank)];
    with_required(Composite::new().stage(format, &m.ssn), value, opts, m)
}

pub fn company_id(value: &str, opts: FieldOptions, m: &Messages) -> Composite {
    let format = vec![
        tolerate_blank(value, opts.error_on_blank, length_equals(value, 4)),
        alphanumeric_only(value, opts.error_on_blank),
    ];
    with_required(Composite::new().stage(format, &m.company_id), value, opts, m)
}

/// Password rules as named values, for requirement checklists.
///
/// ```rust
/// use fieldguard::composite::password_rules;
///
/// let rules = password_rules("jdoe");
/// let unmet: Vec<&str> = rules
///     .checklist("lowercase1")
///     .into_iter()
///     .filter(|(_, ok)| !ok)
///     .map(|(name, _)| name)
///     .collect();
/// assert_eq!(unmet, vec!["has-upper"]);
/// ```
pub fn password_rules(user_id: &str) -> RuleSet {
    let user_id = user_id.to_string();
    RuleSet::new()
        .with(
            Rule::new("length", |v: &str| length_between(v, PASSWORD_MIN, PASSWORD_MAX))
                .with_message("Between 8 and 128 characters"),
        )
        .with(Rule::new("has-upper", has_uppercase).with_message("An uppercase letter"))
        .with(Rule::new("has-lower", has_lowercase).with_message("A lowercase letter"))
        .with(Rule::new("has-digit", has_digit).with_message("A digit"))
        .with(
            Rule::new("not-user-id", move |v: &str| not_contains(v, &user_id))
                .with_message("Does not contain your user ID"),
        )
}

pub fn password(value: &str, user_id: &str, m: &Messages) -> Composite {
    Composite::new().stage(password_rules(user_id).results(value), &m.password)
}

/// Security answer; must not contain the linked field's value.
pub fn security_answer(value: &str, linked: &str, m: &Messages) -> Composite {
    let rules = vec![
        length_between(value, ANSWER_MIN, ANSWER_MAX),
        not_contains(value, linked),
    ];
    Composite::new().stage(rules, &m.security_answer)
}

pub fn confirm(value: &str, original: &str, blank_ok: bool, m: &Messages) -> Composite {
    Composite::new().stage(vec![values_match(value, original, blank_ok)], &m.confirm)
}
