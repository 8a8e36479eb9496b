//! Builder API for creating form validators.

use super::form::FormValidator;
use crate::config::Messages;
use crate::core::ScopeId;
use crate::sink::ErrorSink;

/// Builder for a per-form validator.
///
/// ```rust
/// use fieldguard::validator::FormValidatorBuilder;
/// use fieldguard::sink::RecordingSink;
/// use fieldguard::core::ScopeId;
///
/// let scope = ScopeId::new();
/// let form = FormValidatorBuilder::new(RecordingSink::new())
///     .scope(scope)
///     .build();
/// assert_eq!(form.scope(), &scope);
/// ```
pub struct FormValidatorBuilder<K: ErrorSink> {
    sink: K,
    scope: Option<ScopeId>,
    messages: Messages,
    fields: Vec<String>,
}

impl<K: ErrorSink> FormValidatorBuilder<K> {
    pub fn new(sink: K) -> Self {
        Self {
            sink,
            scope: None,
            messages: Messages::default(),
            fields: Vec::new(),
        }
    }

    /// Use a host-assigned scope id instead of a fresh one
    pub fn scope(mut self, scope: ScopeId) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Replace the default composite messages
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Pre-register a labeled field; ids come back from `FormValidator::fields`
    pub fn field(mut self, label: impl Into<String>) -> Self {
        self.fields.push(label.into());
        self
    }

    pub fn build(self) -> FormValidator<K> {
        let mut form = FormValidator::new(self.scope.unwrap_or_default(), self.sink, self.messages);
        for label in self.fields {
            form.register(label);
        }
        form
    }
}
