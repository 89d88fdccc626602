use retune_apply::Collections;
use retune_model::FieldSet;

/// Live objects a host exposes for tuning.
pub trait Host {
    /// The single global settings object.
    fn defaults(&mut self) -> &mut dyn FieldSet;

    /// The host's entity collections, one per category.
    fn collections(&mut self) -> Collections<'_>;

    /// Called once after tuning, so the host can log its resulting state.
    fn log_state(&self) {}
}
