//! Field validator.
//!
//! Binds a field to rule outcomes and an error policy, decides pass or
//! fail, and reconciles the result with the sink and the form-level
//! indicator.

mod builder;
mod composites;
mod form;
mod policy;

pub use builder::FormValidatorBuilder;
pub use form::FormValidator;
pub use policy::ErrorPolicy;
