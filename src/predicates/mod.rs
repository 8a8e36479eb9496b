//! Predicate layer.
//!
//! Pure `&str -> bool` checks with no shared state. Format predicates take
//! an explicit `error_on_blank` flag: when it is `false` a blank value
//! passes, leaving presence to a separate required rule. Presence and
//! format are never decided by the same predicate.

mod format;
mod presence;
mod text;

pub use format::{
    alphanumeric_only, email_format, numeric_only, phone_format, ssn_format, tolerate_blank,
    varied_digits,
};
pub use presence::{is_blank, not_blank, required_unless_siblings_blank, values_match};
pub use text::{
    has_digit, has_lowercase, has_uppercase, length_between, length_equals, not_contains,
};
