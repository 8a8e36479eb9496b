//! Error-state history tracking.
//!
//! Records every flip of a field's error status, following the same
//! immutable style as the rest of the core: `record` returns a new
//! history instead of mutating the old one.

use super::field::{FieldId, FieldStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One flip of a field's error status.
///
/// # Example
///
/// ```rust
/// use fieldguard::core::{ErrorTransition, FieldId, FieldStatus};
/// use chrono::Utc;
///
/// let transition = ErrorTransition {
///     field: FieldId::new(),
///     from: FieldStatus::Clear,
///     to: FieldStatus::InError,
///     message: Some("This field is required".to_string()),
///     timestamp: Utc::now(),
/// };
/// assert!(transition.is_raise());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorTransition {
    /// The field whose status changed
    pub field: FieldId,
    /// Status before the validation run
    pub from: FieldStatus,
    /// Status after the validation run
    pub to: FieldStatus,
    /// Message shown to the user, if any
    pub message: Option<String>,
    /// When the validation run finished
    pub timestamp: DateTime<Utc>,
}

impl ErrorTransition {
    /// True when the field went from clear to in-error.
    pub fn is_raise(&self) -> bool {
        !self.from.is_error() && self.to.is_error()
    }

    /// True when the field recovered.
    pub fn is_recovery(&self) -> bool {
        self.from.is_error() && !self.to.is_error()
    }
}

/// Ordered history of error-status flips for one form.
///
/// # Example
///
/// ```rust
/// use fieldguard::core::{ErrorHistory, ErrorTransition, FieldId, FieldStatus};
/// use chrono::Utc;
///
/// let field = FieldId::new();
/// let history = ErrorHistory::new().record(ErrorTransition {
///     field,
///     from: FieldStatus::Clear,
///     to: FieldStatus::InError,
///     message: None,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.transitions().len(), 1);
/// assert_eq!(history.last_for(&field).map(|t| t.to), Some(FieldStatus::InError));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorHistory {
    transitions: Vec<ErrorTransition>,
}

impl ErrorHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: ErrorTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    pub fn transitions(&self) -> &[ErrorTransition] {
        &self.transitions
    }

    /// Transitions for one field, oldest first.
    pub fn for_field<'a>(
        &'a self,
        field: &'a FieldId,
    ) -> impl Iterator<Item = &'a ErrorTransition> + 'a {
        self.transitions.iter().filter(move |t| &t.field == field)
    }

    /// Most recent transition for one field.
    pub fn last_for(&self, field: &FieldId) -> Option<&ErrorTransition> {
        self.transitions.iter().rev().find(|t| &t.field == field)
    }

    /// Time between the first and last recorded flip.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raise(field: FieldId) -> ErrorTransition {
        ErrorTransition {
            field,
            from: FieldStatus::Clear,
            to: FieldStatus::InError,
            message: Some("Please enter a valid zip code".to_string()),
            timestamp: Utc::now(),
        }
    }

    fn recover(field: FieldId) -> ErrorTransition {
        ErrorTransition {
            field,
            from: FieldStatus::InError,
            to: FieldStatus::Clear,
            message: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = ErrorHistory::new();
        assert!(history.transitions().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = ErrorHistory::new();
        let new_history = history.record(raise(FieldId::new()));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn for_field_filters_other_fields() {
        let zip = FieldId::new();
        let phone = FieldId::new();

        let history = ErrorHistory::new()
            .record(raise(zip))
            .record(raise(phone))
            .record(recover(zip));

        let zip_flips: Vec<_> = history.for_field(&zip).collect();
        assert_eq!(zip_flips.len(), 2);
        assert!(zip_flips[0].is_raise());
        assert!(zip_flips[1].is_recovery());

        assert!(history.last_for(&phone).unwrap().is_raise());
        assert!(history.last_for(&FieldId::new()).is_none());
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = ErrorHistory::new().record(raise(FieldId::new()));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = ErrorHistory::new().record(raise(FieldId::new()));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: ErrorHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
