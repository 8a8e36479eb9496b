//! Scope error tracking.
//!
//! A scope's error state is never stored. It is recomputed from the field
//! states every time it is needed, so it cannot drift from them.

mod registry;
mod tracker;

pub use registry::{FieldEntry, FieldRegistry};
pub use tracker::{other_errors_exist, scope_has_errors, ScopeInventory};
