//! Field and scope identities plus the per-field error status.
//!
//! Identities are opaque: the engine compares and hashes them but never
//! looks inside. The UI adapter resolves a page element to a `FieldId`
//! once and reuses it for every validation call.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a fresh random identity.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an identity the host already owns.
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

opaque_id!(
    /// Stable reference to one user-editable input.
    FieldId
);

opaque_id!(
    /// Reference to a containing group of fields, usually one form.
    ScopeId
);

/// Error status of a single field.
///
/// A field is `InError` exactly when its most recent validation failed
/// and no passing validation has run since.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldStatus {
    #[default]
    Clear,
    InError,
}

impl FieldStatus {
    /// Status implied by a validation verdict.
    pub fn from_verdict(passed: bool) -> Self {
        if passed {
            Self::Clear
        } else {
            Self::InError
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::InError)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::InError => "InError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_distinct() {
        let a = FieldId::new();
        let b = FieldId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn id_round_trips_through_uuid() {
        let raw = Uuid::new_v4();
        let id = ScopeId::from_uuid(raw);
        assert_eq!(id.as_uuid(), &raw);
        assert_eq!(id.to_string(), raw.to_string());
    }

    #[test]
    fn id_serializes_as_plain_uuid() {
        let id = FieldId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));

        let back: FieldId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn status_follows_verdict() {
        assert_eq!(FieldStatus::from_verdict(true), FieldStatus::Clear);
        assert_eq!(FieldStatus::from_verdict(false), FieldStatus::InError);
        assert!(FieldStatus::InError.is_error());
        assert!(!FieldStatus::default().is_error());
    }

    #[test]
    fn status_names() {
        assert_eq!(FieldStatus::Clear.name(), "Clear");
        assert_eq!(FieldStatus::InError.name(), "InError");
    }
}
