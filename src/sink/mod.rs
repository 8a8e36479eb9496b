//! Error sink boundary.
//!
//! The sink is the UI layer that paints and removes error indicators. The
//! engine only issues commands to it and never reads markup back.

use crate::core::{FieldId, ScopeId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Receiver of error display commands.
///
/// Every command must be idempotent: clearing an already clear field, or
/// setting the same message twice, leaves the display unchanged.
pub trait ErrorSink {
    /// Show `message` on `field`.
    fn set_error(&mut self, field: &FieldId, message: &str);

    /// Remove any error shown on `field`.
    fn clear_error(&mut self, field: &FieldId);

    /// Turn on the scope-level indicator (for example a form banner).
    fn set_scope_error(&mut self, scope: &ScopeId);

    /// Turn off the scope-level indicator.
    fn clear_scope_error(&mut self, scope: &ScopeId);
}

impl<K: ErrorSink + ?Sized> ErrorSink for &mut K {
    fn set_error(&mut self, field: &FieldId, message: &str) {
        (**self).set_error(field, message);
    }

    fn clear_error(&mut self, field: &FieldId) {
        (**self).clear_error(field);
    }

    fn set_scope_error(&mut self, scope: &ScopeId) {
        (**self).set_scope_error(scope);
    }

    fn clear_scope_error(&mut self, scope: &ScopeId) {
        (**self).clear_scope_error(scope);
    }
}

/// A command issued to a sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SinkCommand {
    SetError { field: FieldId, message: String },
    ClearError { field: FieldId },
    SetScopeError { scope: ScopeId },
    ClearScopeError { scope: ScopeId },
}

/// In-memory sink that records commands and the resulting display.
///
/// Useful for headless hosts and for asserting on engine behavior.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    commands: Vec<SinkCommand>,
    shown: HashMap<FieldId, String>,
    flagged: HashSet<ScopeId>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received, oldest first.
    pub fn commands(&self) -> &[SinkCommand] {
        &self.commands
    }

    /// Drain the command log, keeping the display state.
    pub fn take_commands(&mut self) -> Vec<SinkCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Message currently displayed on `field`.
    pub fn shown_message(&self, field: &FieldId) -> Option<&str> {
        self.shown.get(field).map(String::as_str)
    }

    pub fn is_scope_flagged(&self, scope: &ScopeId) -> bool {
        self.flagged.contains(scope)
    }

    /// Number of fields currently showing an error.
    pub fn painted_count(&self) -> usize {
        self.shown.len()
    }
}

impl ErrorSink for RecordingSink {
    fn set_error(&mut self, field: &FieldId, message: &str) {
        self.commands.push(SinkCommand::SetError {
            field: *field,
            message: message.to_string(),
        });
        self.shown.insert(*field, message.to_string());
    }

    fn clear_error(&mut self, field: &FieldId) {
        self.commands.push(SinkCommand::ClearError { field: *field });
        self.shown.remove(field);
    }

    fn set_scope_error(&mut self, scope: &ScopeId) {
        self.commands.push(SinkCommand::SetScopeError { scope: *scope });
        self.flagged.insert(*scope);
    }

    fn clear_scope_error(&mut self, scope: &ScopeId) {
        self.commands.push(SinkCommand::ClearScopeError { scope: *scope });
        self.flagged.remove(scope);
    }
}
