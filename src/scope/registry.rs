//! Per-form field registry.

use super::tracker::ScopeInventory;
use crate::core::{FieldId, FieldStatus, ScopeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error state of one registered field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub label: String,
    pub status: FieldStatus,
    pub message: Option<String>,
}

/// Error state for every field of one scope, in registration order.
#[derive(Clone, Debug)]
pub struct FieldRegistry {
    scope: ScopeId,
    order: Vec<FieldId>,
    entries: HashMap<FieldId, FieldEntry>,
}

impl FieldRegistry {
    pub fn new(scope: ScopeId) -> Self {
        Self {
            scope,
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    pub fn scope(&self) -> &ScopeId {
        &self.scope
    }

    /// Register a new field in the `Clear` state.
    pub fn register(&mut self, label: impl Into<String>) -> FieldId {
        let field = FieldId::new();
        self.insert(field, label.into());
        field
    }

    /// Make sure `field` is tracked, registering it unlabeled if needed.
    pub fn ensure(&mut self, field: &FieldId) -> &mut FieldEntry {
        if !self.entries.contains_key(field) {
            self.insert(*field, String::new());
        }
        self.entries.entry(*field).or_default()
    }

    fn insert(&mut self, field: FieldId, label: String) {
        self.order.push(field);
        self.entries.insert(
            field,
            FieldEntry {
                label,
                ..FieldEntry::default()
            },
        );
    }

    /// Store a new status, returning the previous one.
    pub fn set_status(
        &mut self,
        field: &FieldId,
        status: FieldStatus,
        message: Option<String>,
    ) -> FieldStatus {
        let entry = self.ensure(field);
        let previous = entry.status;
        entry.status = status;
        entry.message = message;
        previous
    }

    pub fn get(&self, field: &FieldId) -> Option<&FieldEntry> {
        self.entries.get(field)
    }

    /// Status of `field`; untracked fields are clear.
    pub fn status(&self, field: &FieldId) -> FieldStatus {
        self.get(field).map(|e| e.status).unwrap_or_default()
    }

    /// Label for log lines, falling back to the id.
    pub fn label(&self, field: &FieldId) -> String {
        match self.get(field) {
            Some(entry) if !entry.label.is_empty() => entry.label.clone(),
            _ => field.to_string(),
        }
    }

    pub fn fields(&self) -> &[FieldId] {
        &self.order
    }

    pub fn fields_in_error(&self) -> Vec<FieldId> {
        self.order
            .iter()
            .filter(|field| self.status(field).is_error())
            .copied()
            .collect()
    }

    /// Set every field back to `Clear`.
    pub fn clear_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.status = FieldStatus::Clear;
            entry.message = None;
        }
    }
}

impl ScopeInventory for FieldRegistry {
    fn fields_in_scope(&self, scope: &ScopeId) -> Vec<FieldId> {
        if scope == &self.scope {
            self.order.clone()
        } else {
            Vec::new()
        }
    }

    fn is_field_in_error(&self, field: &FieldId) -> bool {
        self.status(field).is_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_fields_start_clear() {
        let mut registry = FieldRegistry::new(ScopeId::new());
        let zip = registry.register("zip");

        assert_eq!(registry.status(&zip), FieldStatus::Clear);
        assert_eq!(registry.label(&zip), "zip");
        assert_eq!(registry.fields(), &[zip]);
    }

    #[test]
    fn ensure_registers_once() {
        let mut registry = FieldRegistry::new(ScopeId::new());
        let field = FieldId::new();

        registry.ensure(&field);
        registry.ensure(&field);

        assert_eq!(registry.fields().len(), 1);
        assert_eq!(registry.label(&field), field.to_string());
    }

    #[test]
    fn set_status_returns_previous() {
        let mut registry = FieldRegistry::new(ScopeId::new());
        let field = registry.register("email");

        let previous = registry.set_status(&field, FieldStatus::InError, Some("Bad".into()));
        assert_eq!(previous, FieldStatus::Clear);
        assert_eq!(registry.fields_in_error(), vec![field]);
        assert_eq!(registry.get(&field).unwrap().message.as_deref(), Some("Bad"));

        let previous = registry.set_status(&field, FieldStatus::Clear, None);
        assert_eq!(previous, FieldStatus::InError);
        assert!(registry.fields_in_error().is_empty());
    }

    #[test]
    fn clear_all_resets_every_field() {
        let mut registry = FieldRegistry::new(ScopeId::new());
        let a = registry.register("a");
        let b = registry.register("b");
        registry.set_status(&a, FieldStatus::InError, None);
        registry.set_status(&b, FieldStatus::InError, None);

        registry.clear_all();

        assert!(registry.fields_in_error().is_empty());
        assert_eq!(registry.fields().len(), 2);
    }

    #[test]
    fn inventory_is_scoped() {
        let scope = ScopeId::new();
        let mut registry = FieldRegistry::new(scope);
        let field = registry.register("ssn");

        assert_eq!(registry.fields_in_scope(&scope), vec![field]);
        assert!(registry.fields_in_scope(&ScopeId::new()).is_empty());
    }
}
