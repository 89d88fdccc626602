use crate::{DefaultsGroup, OptionsGroup, Parameter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters addressed to one named entity of a declared category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityPatch {
    #[serde(default)]
    pub name: String,
    /// Category tag, e.g. `"train"`. Resolved by the applier.
    #[serde(default, rename = "type")]
    pub category: String,
    #[serde(default)]
    pub params: Vec<Parameter>,
}

impl EntityPatch {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            params: Vec::new(),
        }
    }

    /// Appends a parameter, builder style.
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// True when both the entity name and the category tag are non-empty.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.name.is_empty() && !self.category.is_empty()
    }
}

impl fmt::Display for EntityPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] ({} params)", self.name, self.category, self.params.len())
    }
}

/// The whole parsed configuration.
///
/// Every section is optional; an absent section only disables the work that
/// depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionsGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsGroup>,
    #[serde(default, rename = "entities", skip_serializing_if = "Vec::is_empty")]
    pub entity_patches: Vec<EntityPatch>,
}

impl ConfigurationDocument {
    /// Looks up a named option, if the options section exists.
    pub fn option(&self, name: &str) -> Option<&Parameter> {
        self.options.as_ref().and_then(|o| o.get(name))
    }
}
