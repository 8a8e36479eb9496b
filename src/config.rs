//! User-visible messages for the composite validators.
//!
//! Every field has an English default, so a partial JSON document only
//! overrides what it names:
//!
//! ```rust
//! use fieldguard::config::Messages;
//!
//! let messages = Messages::from_json(r#"{ "zip": "Enter a 5-digit ZIP" }"#).unwrap();
//! assert_eq!(messages.zip, "Enter a 5-digit ZIP");
//! assert_eq!(messages.required, "This field is required");
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub required: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
    pub ssn: String,
    pub company_id: String,
    pub password: String,
    pub security_answer: String,
    pub confirm: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: "This field is required".to_string(),
            zip: "Please enter a valid 5-digit zip code".to_string(),
            phone: "Please enter a valid phone number".to_string(),
            email: "Please enter a valid email address".to_string(),
            ssn: "Please enter a valid social security number".to_string(),
            company_id: "Company ID must be 4 letters or digits".to_string(),
            password: "Password must be 8-128 characters with an uppercase letter, \
                       a lowercase letter and a digit, and must not contain your user ID"
                .to_string(),
            security_answer: "Answer must be 4-512 characters and must not contain the question"
                .to_string(),
            confirm: "Values do not match".to_string(),
        }
    }
}

impl Messages {
    /// Parse overrides from JSON and reject blank messages.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let messages: Messages = serde_json::from_str(json)?;
        messages.validate()?;
        Ok(messages)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let entries = [
            ("required", &self.required),
            ("zip", &self.zip),
            ("phone", &self.phone),
            ("email", &self.email),
            ("ssn", &self.ssn),
            ("company_id", &self.company_id),
            ("password", &self.password),
            ("security_answer", &self.security_answer),
            ("confirm", &self.confirm),
        ];

        match entries.iter().find(|(_, text)| text.trim().is_empty()) {
            Some((key, _)) => Err(ConfigError::EmptyMessage { key: *key }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        assert!(Messages::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let messages = Messages::from_json(r#"{ "phone": "Bad phone" }"#).unwrap();
        assert_eq!(messages.phone, "Bad phone");
        assert_eq!(messages.email, Messages::default().email);
    }

    #[test]
    fn blank_message_is_rejected() {
        let err = Messages::from_json(r#"{ "confirm": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyMessage { key: "confirm" }));
        assert_eq!(err.to_string(), "Message for 'confirm' must not be empty");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Messages::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn messages_round_trip() {
        let json = serde_json::to_string(&Messages::default()).unwrap();
        assert_eq!(Messages::from_json(&json).unwrap(), Messages::default());
    }
}
