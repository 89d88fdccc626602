use crate::{GrowthSubject, compute_limit};
use retune_model::ConfigurationDocument;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// Option holding the base growth limit.
pub const GROWTH_LIMIT_OPTION: &str = "RawCityLevelLimit";

/// Resolved state of the policy. Decided once, on first evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyState {
    /// No usable limit; every operation is permitted.
    Disabled,
    /// Limit starts from `base_limit`.
    Active { base_limit: i32 },
}

impl PolicyState {
    /// Reads `option` from the document.
    ///
    /// Disabled when the document or option is missing, malformed, does not
    /// convert to an `int`-compatible value, or is not positive.
    pub fn resolve(doc: Option<&ConfigurationDocument>, option: &str) -> Self {
        let Some(param) = doc.and_then(|d| d.option(option)) else {
            info!("Growth limit disabled: option {} not set", option);
            return Self::Disabled;
        };
        if !param.is_well_formed() {
            info!("Growth limit disabled: wrong param {}", param);
            return Self::Disabled;
        }

        let base_limit = match param.convert() {
            Ok(value) => value.as_i32(),
            Err(e) => {
                info!("Growth limit disabled: {}", e);
                return Self::Disabled;
            }
        };

        match base_limit {
            Some(base_limit) if base_limit > 0 => {
                info!("Growth limit active, base limit {}", base_limit);
                Self::Active { base_limit }
            }
            _ => {
                info!("Growth limit disabled: {} is not a positive int", param);
                Self::Disabled
            }
        }
    }
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Permitted,
    Denied { level: i32, limit: i32 },
}

impl Decision {
    #[must_use]
    pub const fn is_permitted(self) -> bool {
        matches!(self, Self::Permitted)
    }
}

/// Growth gate with a lazily resolved, cached base limit.
///
/// Safe to share between threads: concurrent first evaluations all observe
/// the same resolved state.
#[derive(Debug)]
pub struct GrowthPolicy {
    config: Option<Arc<ConfigurationDocument>>,
    option: String,
    state: OnceLock<PolicyState>,
}

impl GrowthPolicy {
    /// Creates a policy reading [`GROWTH_LIMIT_OPTION`].
    pub fn new(config: Option<Arc<ConfigurationDocument>>) -> Self {
        Self::with_option(config, GROWTH_LIMIT_OPTION)
    }

    /// Creates a policy reading a custom option name.
    pub fn with_option(
        config: Option<Arc<ConfigurationDocument>>,
        option: impl Into<String>,
    ) -> Self {
        Self {
            config,
            option: option.into(),
            state: OnceLock::new(),
        }
    }

    /// The resolved state, resolving it on first call.
    pub fn state(&self) -> PolicyState {
        *self
            .state
            .get_or_init(|| PolicyState::resolve(self.config.as_deref(), &self.option))
    }

    /// True once the state has been resolved.
    pub fn is_resolved(&self) -> bool {
        self.state.get().is_some()
    }

    /// Decides whether `subject` may grow one more level.
    pub fn evaluate<S: GrowthSubject + ?Sized>(&self, subject: &S) -> Decision {
        let PolicyState::Active { base_limit } = self.state() else {
            return Decision::Permitted;
        };

        let limit = compute_limit(base_limit, subject);
        let level = subject.level();
        if level < limit {
            Decision::Permitted
        } else {
            debug!("Growth denied at level {} (limit {})", level, limit);
            Decision::Denied { level, limit }
        }
    }

    /// Shorthand for `evaluate(subject).is_permitted()`.
    pub fn permits<S: GrowthSubject + ?Sized>(&self, subject: &S) -> bool {
        self.evaluate(subject).is_permitted()
    }
}
