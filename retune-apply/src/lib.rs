//! Entity resolution and field mutation for retune.
//!
//! Takes the parameter groups of a [`ConfigurationDocument`] and overwrites
//! the like-named fields on host objects:
//! - defaults go onto the host's single settings object
//! - each entity patch is routed by its category tag to one of four host
//!   collections, and applied to the first entity with a matching name
//!
//! Application is fail-open. A malformed record, a value that does not
//! convert, an unknown field, an unknown category or a missing entity each
//! produce one [`SkipEvent`] (and one warning) and never stop the rest of
//! the document from being applied.
//!
//! [`ConfigurationDocument`]: retune_model::ConfigurationDocument

mod applier;
mod category;
mod collection;
mod report;

pub use applier::{Applier, apply_defaults, apply_entity_patches};
pub use category::Category;
pub use collection::{Collection, Collections};
pub use report::{ApplyReport, SkipEvent};
