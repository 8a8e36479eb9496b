//! Read-only queries over a scope's field inventory.

use crate::core::{FieldId, ScopeId};
use log::trace;

/// Host view of which fields a scope holds and which are in error.
///
/// The engine does not own the field inventory; it only asks.
pub trait ScopeInventory {
    fn fields_in_scope(&self, scope: &ScopeId) -> Vec<FieldId>;

    fn is_field_in_error(&self, field: &FieldId) -> bool;
}

/// Whether any field in `scope` other than `excluding` is in error.
///
/// `excluding` is skipped even if its own state has not been updated yet,
/// so a field can ask before clearing itself. Never mutates anything.
///
/// # Example
///
/// ```rust
/// use fieldguard::scope::{other_errors_exist, FieldRegistry};
/// use fieldguard::core::{FieldStatus, ScopeId};
///
/// let mut registry = FieldRegistry::new(ScopeId::new());
/// let zip = registry.register("zip");
/// let phone = registry.register("phone");
/// registry.set_status(&phone, FieldStatus::InError, Some("Invalid phone".into()));
///
/// let scope = *registry.scope();
/// assert!(other_errors_exist(&registry, &scope, &zip));
/// assert!(!other_errors_exist(&registry, &scope, &phone));
/// ```
pub fn other_errors_exist<I>(inventory: &I, scope: &ScopeId, excluding: &FieldId) -> bool
where
    I: ScopeInventory + ?Sized,
{
    let remaining = inventory
        .fields_in_scope(scope)
        .iter()
        .filter(|field| *field != excluding)
        .filter(|field| inventory.is_field_in_error(field))
        .count();

    trace!("scope {scope}: {remaining} other field(s) in error besides {excluding}");
    remaining > 0
}

/// Derived scope state: at least one field in `scope` is in error.
pub fn scope_has_errors<I>(inventory: &I, scope: &ScopeId) -> bool
where
    I: ScopeInventory + ?Sized,
{
    inventory
        .fields_in_scope(scope)
        .iter()
        .any(|field| inventory.is_field_in_error(field))
}
