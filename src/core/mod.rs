//! Core value types.
//!
//! This module contains the pure pieces the engine is built from:
//! - Field and scope identities and the per-field error status
//! - Rules and ordered rule sets
//! - Immutable error-state history
//!
//! Nothing in this module talks to the UI or holds form state.

mod field;
mod history;
mod rule;

pub use field::{FieldId, FieldStatus, ScopeId};
pub use history::{ErrorHistory, ErrorTransition};
pub use rule::{Rule, RuleSet};
