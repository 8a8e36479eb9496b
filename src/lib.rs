//! Fieldguard: rule composition and error-state reconciliation for forms
//!
//! Fieldguard decides when a form field is in error and keeps the page's
//! error indicators consistent as the user corrects input. It follows a
//! "pure core, imperative shell" layout: predicates and rule evaluation are
//! pure functions, and a single stateful `FormValidator` per form turns
//! verdicts into commands for an `ErrorSink`.
//!
//! # Core Concepts
//!
//! - **Predicates**: pure `&str -> bool` checks with explicit blank handling
//! - **Evaluator**: combines rule outcomes with or without short-circuit
//! - **FormValidator**: owns per-field error status and talks to the sink
//! - **Scope tracking**: the form indicator clears only when no other field
//!   is still in error
//!
//! # Example
//!
//! ```rust
//! use fieldguard::composite::FieldOptions;
//! use fieldguard::sink::RecordingSink;
//! use fieldguard::validator::FormValidatorBuilder;
//!
//! let mut form = FormValidatorBuilder::new(RecordingSink::new()).build();
//! let zip = form.register("zip");
//! let phone = form.register("phone");
//!
//! assert!(!form.validate_zip(&zip, "", FieldOptions::required()));
//! assert!(!form.validate_phone(&phone, "111-111-1111", FieldOptions::optional()));
//!
//! // Fixing the zip leaves the form flagged while the phone is still wrong.
//! assert!(form.validate_zip(&zip, "02134", FieldOptions::required()));
//! assert!(form.sink().is_scope_flagged(form.scope()));
//!
//! assert!(form.validate_phone(&phone, "617-555-0134", FieldOptions::optional()));
//! assert!(!form.sink().is_scope_flagged(form.scope()));
//! ```

pub mod composite;
pub mod config;
pub mod core;
pub mod error;
pub mod evaluator;
pub mod predicates;
pub mod scope;
pub mod sink;
pub mod validator;

// Re-export commonly used types
pub use crate::core::{FieldId, FieldStatus, Rule, RuleSet, ScopeId};
pub use composite::FieldOptions;
pub use config::Messages;
pub use error::ConfigError;
pub use evaluator::{evaluate, Evaluation, EvaluationMode};
pub use sink::{ErrorSink, RecordingSink};
pub use validator::{ErrorPolicy, FormValidator, FormValidatorBuilder};
