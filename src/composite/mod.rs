//! Pre-built rule sets for common form fields.
//!
//! A composite is an ordered list of stages. Each stage is a rule set with
//! one message: the format stage carries the field's own message and an
//! appended required stage carries the required message. The first failing
//! stage decides what the user sees, so "wrong format" and "missing" are
//! always reported separately.
//!
//! # Example
//!
//! ```rust
//! use fieldguard::composite::{self, FieldOptions};
//! use fieldguard::config::Messages;
//!
//! let messages = Messages::default();
//!
//! let optional = composite::zip("", FieldOptions::optional(), &messages);
//! assert!(optional.failing_stage().is_none());
//!
//! let required = composite::zip("", FieldOptions::required(), &messages);
//! assert_eq!(required.failing_stage().map(|s| s.message()), Some("This field is required"));
//! ```

mod builders;

pub use builders::{
    company_id, confirm, email, password, password_rules, phone, required,
    required_if_siblings_filled, security_answer, ssn, zip, zip_group,
};

use crate::evaluator;
use serde::{Deserialize, Serialize};

/// Blank handling for a composite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Fail format rules on a blank value instead of passing them.
    pub error_on_blank: bool,
    /// Append a required stage after the format stage.
    pub required: bool,
}

impl FieldOptions {
    /// Blank passes; nothing is required.
    pub fn optional() -> Self {
        Self::default()
    }

    /// Blank passes the format stage, then fails the required stage.
    pub fn required() -> Self {
        Self {
            error_on_blank: false,
            required: true,
        }
    }

    pub fn error_on_blank(mut self, error_on_blank: bool) -> Self {
        self.error_on_blank = error_on_blank;
        self
    }
}

/// One rule set with the single message reported when it fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stage {
    results: Vec<bool>,
    message: String,
}

impl Stage {
    pub fn new(results: Vec<bool>, message: impl Into<String>) -> Self {
        Self {
            results,
            message: message.into(),
        }
    }

    pub fn results(&self) -> &[bool] {
        &self.results
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn passed(&self) -> bool {
        evaluator::all_pass(&self.results, true)
    }
}

/// Ordered stages evaluated with short-circuit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composite {
    stages: Vec<Stage>,
}

impl Composite {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn stage(mut self, results: Vec<bool>, message: impl Into<String>) -> Self {
        self.stages.push(Stage::new(results, message));
        self
    }

    /// Append a stage only when `condition` holds.
    pub fn stage_if(self, condition: bool, results: Vec<bool>, message: impl Into<String>) -> Self {
        if condition {
            self.stage(results, message)
        } else {
            self
        }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// First stage whose rules fail; later stages are not consulted.
    pub fn failing_stage(&self) -> Option<&Stage> {
        self.stages.iter().find(|stage| !stage.passed())
    }

    /// Every rule outcome across all stages, in order.
    pub fn results(&self) -> Vec<bool> {
        self.stages
            .iter()
            .flat_map(|stage| stage.results.iter().copied())
            .collect()
    }

    /// Message of the first stage, used as the composite's own message.
    pub fn primary_message(&self) -> Option<&str> {
        self.stages.first().map(Stage::message)
    }
}
