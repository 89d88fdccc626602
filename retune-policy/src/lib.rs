//! Growth-limit policy for retune.
//!
//! Gates a host "level up" operation behind a dynamic cap. The cap starts
//! from a base limit read once from the document's options and is adjusted
//! by the subject's live attributes.
//!
//! The policy fails open: without a usable base limit it is permanently
//! disabled and permits everything.

mod growth;
mod subject;

pub use growth::{Decision, GROWTH_LIMIT_OPTION, GrowthPolicy, PolicyState};
pub use subject::{
    CAPITAL_BONUS, GrowthSubject, IMPORTANT_BONUS, RESORT_PENALTY, SECONDARY_FEATURE_BONUS,
    compute_limit,
};
