//! Composite validators wired to a form.
//!
//! Each method builds the composite from the values passed in and issues
//! exactly one field validation for it.

use super::form::FormValidator;
use super::policy::ErrorPolicy;
use crate::composite::{self, Composite, FieldOptions};
use crate::core::FieldId;
use crate::sink::ErrorSink;

impl<K: ErrorSink> FormValidator<K> {
    /// Validate a field with a composite's stages.
    ///
    /// The first failing stage supplies the rules and message; when every
    /// stage passes the field is cleared.
    pub fn validate_composite(&mut self, field: &FieldId, composite: &Composite) -> bool {
        match composite.failing_stage() {
            Some(stage) => {
                let policy = ErrorPolicy::message(stage.message());
                self.validate_field(field, stage.results(), &policy)
            }
            None => {
                let policy = composite
                    .primary_message()
                    .map_or(ErrorPolicy::Silent, ErrorPolicy::message);
                self.validate_field(field, &composite.results(), &policy)
            }
        }
    }

    pub fn validate_required(&mut self, field: &FieldId, value: &str) -> bool {
        let composite = composite::required(value, self.messages());
        self.validate_composite(field, &composite)
    }

    pub fn validate_required_if_siblings_filled<S: AsRef<str>>(
        &mut self,
        field: &FieldId,
        value: &str,
        siblings: &[S],
    ) -> bool {
        let composite = composite::required_if_siblings_filled(value, siblings, self.messages());
        self.validate_composite(field, &composite)
    }

    pub fn validate_zip(&mut self, field: &FieldId, value: &str, opts: FieldOptions) -> bool {
        let composite = composite::zip(value, opts, self.messages());
        self.validate_composite(field, &composite)
    }

    pub fn validate_zip_group<S: AsRef<str>>(
        &mut self,
        field: &FieldId,
        value: &str,
        siblings: &[S],
        opts: FieldOptions,
    ) -> bool {
        let composite = composite::zip_group(value, siblings, opts, self.messages());
        self.validate_composite(field, &composite)
    }

    pub fn validate_phone(&mut self, field: &FieldId, value: &str, opts: FieldOptions) -> bool {
        let composite = composite::phone(value, opts, self.messages());
        self.validate_composite(field, &composite)
    }

    pub fn validate_email(&mut self, field: &FieldId, value: &str, opts: FieldOptions) -> bool {
        let composite = composite::email(value, opts, self.messages());
        self.validate_composite(field, &composite)
    }

    pub fn validate_ssn(&mut self, field: &FieldId, value: &str, opts: FieldOptions) -> bool {
        let composite = composite::ssn(value, opts, self.messages());
        self.validate_composite(field, &composite)
    }

    pub fn validate_company_id(
        &mut self,
        field: &FieldId,
        value: &str,
        opts: FieldOptions,
    ) -> bool {
        let composite = composite::company_id(value, opts, self.messages());
        self.validate_composite(field, &composite)
    }

    pub fn validate_password(&mut self, field: &FieldId, value: &str, user_id: &str) -> bool {
        let composite = composite::password(value, user_id, self.messages());
        self.validate_composite(field, &composite)
    }

    /// `linked` is the current value of the field the answer must not repeat.
    pub fn validate_security_answer(
        &mut self,
        field: &FieldId,
        value: &str,
        linked: &str,
    ) -> bool {
        let composite = composite::security_answer(value, linked, self.messages());
        self.validate_composite(field, &composite)
    }

    pub fn validate_confirm(
        &mut self,
        field: &FieldId,
        value: &str,
        original: &str,
        blank_ok: bool,
    ) -> bool {
        let composite = composite::confirm(value, original, blank_ok, self.messages());
        self.validate_composite(field, &composite)
    }
}

#[cfg(test)]
mod tests {
    use crate::composite::FieldOptions;
    use crate::sink::{RecordingSink, SinkCommand};
    use crate::validator::FormValidatorBuilder;

    #[test]
    fn one_command_group_per_composite() {
        let mut form = FormValidatorBuilder::new(RecordingSink::new()).build();
        let zip = form.register("zip");
        let scope = *form.scope();

        assert!(!form.validate_zip(&zip, "", FieldOptions::required()));
        assert_eq!(
            form.sink_mut().take_commands(),
            vec![
                SinkCommand::SetError {
                    field: zip,
                    message: "This field is required".to_string()
                },
                SinkCommand::SetScopeError { scope },
            ]
        );

        assert!(form.validate_zip(&zip, "02134", FieldOptions::required()));
        assert_eq!(
            form.sink_mut().take_commands(),
            vec![
                SinkCommand::ClearError { field: zip },
                SinkCommand::ClearScopeError { scope },
            ]
        );
    }

    #[test]
    fn linked_value_is_read_per_call() {
        let mut form = FormValidatorBuilder::new(RecordingSink::new()).build();
        let confirm = form.register("confirm");

        let mut password = String::from("Secret123");
        assert!(form.validate_confirm(&confirm, "Secret123", &password, false));

        password.push('!');
        assert!(!form.validate_confirm(&confirm, "Secret123", &password, false));
        assert_eq!(form.message(&confirm), Some(form.messages().confirm.as_str()));
    }

    #[test]
    fn custom_messages_are_used() {
        let mut messages = crate::config::Messages::default();
        messages.phone = "Phone looks wrong".to_string();

        let mut form = FormValidatorBuilder::new(RecordingSink::new())
            .messages(messages)
            .build();
        let phone = form.register("phone");

        form.validate_phone(&phone, "555-12", FieldOptions::optional());
        assert_eq!(form.sink().shown_message(&phone), Some("Phone looks wrong"));
    }
}
