//! Per-form field validator.
//!
//! One `FormValidator` exists per loaded form. It owns the error status of
//! each field in the form, issues display commands to the sink, and
//! decides when the form-level indicator may be cleared.

use super::policy::ErrorPolicy;
use crate::config::Messages;
use crate::core::{ErrorHistory, ErrorTransition, FieldId, FieldStatus, RuleSet, ScopeId};
use crate::evaluator;
use crate::scope::{other_errors_exist, scope_has_errors, FieldRegistry};
use crate::sink::ErrorSink;
use chrono::Utc;
use log::debug;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Stateful validator for one form.
///
/// # Example
///
/// ```rust
/// use fieldguard::validator::{ErrorPolicy, FormValidatorBuilder};
/// use fieldguard::sink::RecordingSink;
///
/// let mut form = FormValidatorBuilder::new(RecordingSink::new()).build();
/// let name = form.register("name");
///
/// let policy = ErrorPolicy::message("Name is required");
/// assert!(!form.validate_field(&name, &[false], &policy));
/// assert_eq!(form.sink().shown_message(&name), Some("Name is required"));
///
/// assert!(form.validate_field(&name, &[true], &policy));
/// assert!(!form.has_errors());
/// assert!(!form.sink().is_scope_flagged(form.scope()));
/// ```
pub struct FormValidator<K: ErrorSink> {
    registry: FieldRegistry,
    sink: K,
    messages: Messages,
    history: ErrorHistory,
}

impl<K: ErrorSink> FormValidator<K> {
    pub fn new(scope: ScopeId, sink: K, messages: Messages) -> Self {
        Self {
            registry: FieldRegistry::new(scope),
            sink,
            messages,
            history: ErrorHistory::new(),
        }
    }

    pub fn scope(&self) -> &ScopeId {
        self.registry.scope()
    }

    /// Register a labeled field. Unregistered fields are tracked on first
    /// validation without a label.
    pub fn register(&mut self, label: impl Into<String>) -> FieldId {
        self.registry.register(label)
    }

    pub fn fields(&self) -> &[FieldId] {
        self.registry.fields()
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn history(&self) -> &ErrorHistory {
        &self.history
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn status(&self, field: &FieldId) -> FieldStatus {
        self.registry.status(field)
    }

    /// Message recorded for a field in error, if it has one.
    pub fn message(&self, field: &FieldId) -> Option<&str> {
        self.registry.get(field).and_then(|e| e.message.as_deref())
    }

    /// Derived form-level state.
    pub fn has_errors(&self) -> bool {
        scope_has_errors(&self.registry, self.registry.scope())
    }

    pub fn fields_in_error(&self) -> Vec<FieldId> {
        self.registry.fields_in_error()
    }

    /// Validate one field against already-computed rule outcomes.
    ///
    /// Rules are combined with short-circuit. The verdict is final before
    /// any state changes or sink commands happen.
    pub fn validate_field(
        &mut self,
        field: &FieldId,
        rules: &[bool],
        policy: &ErrorPolicy,
    ) -> bool {
        let passed = evaluator::all_pass(rules, true);
        if passed {
            self.pass(field);
        } else {
            self.fail(field, policy.text().map(str::to_string));
        }
        passed
    }

    /// Run every rule and report all failing messages at once.
    ///
    /// The sink receives the messages joined by newlines.
    pub fn validate_collecting(
        &mut self,
        field: &FieldId,
        value: &str,
        rules: &RuleSet,
    ) -> Validation<(), NonEmptyVec<String>> {
        let outcome = rules.collect(value);
        match &outcome {
            Validation::Success(()) => self.pass(field),
            Validation::Failure(messages) => {
                let joined = messages
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join("\n");
                self.fail(field, Some(joined));
            }
        }
        outcome
    }

    /// Clear every field, the form indicator and the history, e.g. when the
    /// form is dismissed and reused.
    pub fn reset(&mut self) {
        for field in self.registry.fields_in_error() {
            self.sink.clear_error(&field);
        }
        self.registry.clear_all();
        self.history = ErrorHistory::new();
        let scope = *self.registry.scope();
        self.sink.clear_scope_error(&scope);
        debug!("form {scope} reset");
    }

    fn pass(&mut self, field: &FieldId) {
        self.transition(field, FieldStatus::Clear, None);
        self.sink.clear_error(field);

        let scope = *self.registry.scope();
        if other_errors_exist(&self.registry, &scope, field) {
            debug!(
                "{} cleared; form {scope} still has errors",
                self.registry.label(field)
            );
        } else {
            debug!("{} cleared; clearing form {scope}", self.registry.label(field));
            self.sink.clear_scope_error(&scope);
        }
    }

    fn fail(&mut self, field: &FieldId, message: Option<String>) {
        // A silent failure leaves any painted message in place, so keep it recorded.
        let recorded = message.clone().or_else(|| {
            self.registry
                .get(field)
                .filter(|e| e.status.is_error())
                .and_then(|e| e.message.clone())
        });
        self.transition(field, FieldStatus::InError, recorded);

        match message {
            Some(message) => {
                debug!("{} failed: {message}", self.registry.label(field));
                self.sink.set_error(field, &message);
                let scope = *self.registry.scope();
                self.sink.set_scope_error(&scope);
            }
            None => debug!("{} failed silently", self.registry.label(field)),
        }
    }

    fn transition(&mut self, field: &FieldId, to: FieldStatus, message: Option<String>) {
        let from = self.registry.set_status(field, to, message.clone());
        if from != to {
            self.history = self.history.record(ErrorTransition {
                field: *field,
                from,
                to,
                message,
                timestamp: Utc::now(),
            });
        }
    }
}
