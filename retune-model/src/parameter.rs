use retune_types::{ConversionResult, TypeTag, TypedValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, typed parameter as written in the document.
///
/// Missing keys deserialize as empty strings; completeness is judged by
/// [`Parameter::is_well_formed`], not by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_tag: String,
    #[serde(default)]
    pub value: String,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        type_tag: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            value: value.into(),
        }
    }

    /// True when name, type and value are all non-empty.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.name.is_empty() && !self.type_tag.is_empty() && !self.value.is_empty()
    }

    /// The resolved type tag (unknown tags resolve to `String`).
    #[must_use]
    pub fn tag(&self) -> TypeTag {
        TypeTag::from_tag(&self.type_tag)
    }

    /// Converts the raw value according to the declared type.
    pub fn convert(&self) -> ConversionResult<TypedValue> {
        retune_types::convert_as(self.tag(), &self.value)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.type_tag, self.value)
    }
}

/// Global feature toggles and limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsGroup {
    #[serde(default)]
    pub params: Vec<Parameter>,
}

impl OptionsGroup {
    /// Looks up an option by name. Names are not required to be unique;
    /// the first match wins.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// Baseline tunables for the host's single global settings object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsGroup {
    #[serde(default)]
    pub params: Vec<Parameter>,
}
