//! Configuration document model for retune.
//!
//! Defines the shapes every other subsystem depends on:
//! - [`Parameter`]: a name/type/value triple, still in raw text form
//! - [`OptionsGroup`] / [`DefaultsGroup`]: ordered parameter lists
//! - [`EntityPatch`]: parameters addressed to one named, categorised entity
//! - [`ConfigurationDocument`]: the whole parsed document
//! - [`FieldSet`] / [`FieldTable`] / [`TargetEntity`]: the contract host
//!   objects implement so fields can be overwritten by name
//!
//! Nothing in this crate touches storage; parsing lives in `retune-config`.

mod document;
mod field;
mod parameter;

pub use document::{ConfigurationDocument, EntityPatch};
pub use field::{FieldError, FieldResult, FieldSet, FieldTable, Patchable, TargetEntity};
pub use parameter::{DefaultsGroup, OptionsGroup, Parameter};
