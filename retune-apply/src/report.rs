use crate::Category;
use retune_model::FieldError;
use retune_types::ConversionError;
use std::fmt;
use tracing::warn;

/// One record that was not applied, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipEvent {
    /// Parameter with an empty name, type or value.
    ///
    /// `entity` names the patch the parameter belongs to; `None` for defaults.
    MalformedParameter {
        entity: Option<String>,
        param: String,
    },
    /// Value text did not match its declared type.
    Conversion {
        entity: Option<String>,
        param: String,
        error: ConversionError,
    },
    /// Target has no such field, or the field cannot hold the value.
    Field {
        entity: Option<String>,
        error: FieldError,
    },
    /// Entity patch with an empty name or category.
    MalformedPatch { patch: String },
    /// Category tag outside the known set.
    UnknownCategory { entity: String, category: String },
    /// No entity of that name in the resolved collection.
    EntityNotFound { entity: String, category: Category },
}

impl SkipEvent {
    /// The entity patch the skipped record belongs to, if any.
    pub fn entity(&self) -> Option<&str> {
        match self {
            Self::MalformedParameter { entity, .. }
            | Self::Conversion { entity, .. }
            | Self::Field { entity, .. } => entity.as_deref(),
            Self::MalformedPatch { .. } => None,
            Self::UnknownCategory { entity, .. } | Self::EntityNotFound { entity, .. } => {
                Some(entity.as_str())
            }
        }
    }
}

impl fmt::Display for SkipEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedParameter { entity, param } => {
                write_context(f, entity.as_deref())?;
                write!(f, "Wrong param: {param}")
            }
            Self::Conversion {
                entity,
                param,
                error,
            } => {
                write_context(f, entity.as_deref())?;
                write!(f, "Cannot convert {param}: {error}")
            }
            Self::Field { entity, error } => {
                write_context(f, entity.as_deref())?;
                write!(f, "Cannot set field: {error}")
            }
            Self::MalformedPatch { patch } => write!(f, "Wrong entity: {patch}"),
            Self::UnknownCategory { entity, category } => {
                write!(f, "Entity {entity} has unknown category {category:?}")
            }
            Self::EntityNotFound { entity, category } => {
                write!(f, "Entity {entity} not found in {category}")
            }
        }
    }
}

fn write_context(f: &mut fmt::Formatter<'_>, entity: Option<&str>) -> fmt::Result {
    match entity {
        Some(entity) => write!(f, "{entity}: "),
        None => Ok(()),
    }
}

/// Outcome of one apply step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Number of fields written.
    pub applied: usize,
    /// Skipped records, in document order.
    pub skipped: Vec<SkipEvent>,
}

impl ApplyReport {
    /// Records a skip. Every skip is logged exactly once, here.
    pub(crate) fn skip(&mut self, event: SkipEvent) {
        warn!("{}", event);
        self.skipped.push(event);
    }

    /// True when nothing was skipped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Number of skips matching `pred`.
    pub fn count(&self, pred: impl Fn(&SkipEvent) -> bool) -> usize {
        self.skipped.iter().filter(|e| pred(e)).count()
    }

    /// Folds another report into this one.
    pub fn merge(&mut self, other: Self) {
        self.applied += other.applied;
        self.skipped.extend(other.skipped);
    }
}
