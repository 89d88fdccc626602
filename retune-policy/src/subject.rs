pub const IMPORTANT_BONUS: i32 = 3;
pub const CAPITAL_BONUS: i32 = 3;
pub const RESORT_PENALTY: i32 = 5;
pub const SECONDARY_FEATURE_BONUS: i32 = 2;

/// Live attributes of the object whose growth is gated.
pub trait GrowthSubject {
    /// Current level.
    fn level(&self) -> i32;

    fn is_important(&self) -> bool;

    /// Capitals are always important in host data, so they collect both bonuses.
    fn is_capital(&self) -> bool;

    fn is_resort(&self) -> bool;

    /// Whether the optional secondary feature is present.
    fn has_secondary_feature(&self) -> bool;

    /// Levels of the sub-components of the associated structure. Empty
    /// slots are `None`; no structure at all is an empty list.
    fn component_levels(&self) -> Vec<Option<i32>>;
}

/// Computes the growth cap for `subject`.
///
/// Saturates at the `i32` bounds instead of overflowing.
pub fn compute_limit<S: GrowthSubject + ?Sized>(base_limit: i32, subject: &S) -> i32 {
    let mut limit = base_limit;
    if subject.is_important() {
        limit = limit.saturating_add(IMPORTANT_BONUS);
    }
    if subject.is_capital() {
        limit = limit.saturating_add(CAPITAL_BONUS);
    }
    if subject.is_resort() {
        limit = limit.saturating_sub(RESORT_PENALTY);
    }
    if subject.has_secondary_feature() {
        limit = limit.saturating_add(SECONDARY_FEATURE_BONUS);
    }
    subject
        .component_levels()
        .into_iter()
        .flatten()
        .fold(limit, i32::saturating_add)
}
