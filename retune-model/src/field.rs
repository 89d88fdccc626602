//! Settable-by-name field contract.
//!
//! Host types declare their tunable fields once in a [`FieldTable`], mapping
//! each document name to a typed setter. The applier only ever sees
//! [`FieldSet`], so an unknown name or a value of the wrong kind fails the
//! same way for every target: as a [`FieldError`] the caller logs and skips.

use retune_types::{BigDecimal, TypeTag, TypedValue};
use std::collections::BTreeMap;
use std::fmt;

/// Result type for field writes.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors raised when writing a field by name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown field: {field}")]
    Unknown { field: String },

    #[error("field {field} expects {expected}, got {found}")]
    Mismatch {
        field: String,
        expected: TypeTag,
        found: TypeTag,
    },
}

/// Anything whose fields can be overwritten by name.
pub trait FieldSet {
    fn set_field(&mut self, field: &str, value: TypedValue) -> FieldResult<()>;
}

/// A host type with a static field table.
///
/// Implementors get [`FieldSet`] for free.
pub trait Patchable: Sized + 'static {
    fn field_table() -> &'static FieldTable<Self>;
}

impl<T: Patchable> FieldSet for T {
    fn set_field(&mut self, field: &str, value: TypedValue) -> FieldResult<()> {
        T::field_table().set(self, field, value)
    }
}

/// A host entity that can be addressed by name inside its collection.
pub trait TargetEntity: FieldSet {
    fn entity_name(&self) -> &str;
}

enum Setter<T> {
    Byte(fn(&mut T, u8)),
    Int(fn(&mut T, i32)),
    Long(fn(&mut T, i64)),
    Decimal(fn(&mut T, BigDecimal)),
    Text(fn(&mut T, String)),
}

impl<T> Setter<T> {
    const fn expects(&self) -> TypeTag {
        match self {
            Self::Byte(_) => TypeTag::Byte,
            Self::Int(_) => TypeTag::Int,
            Self::Long(_) => TypeTag::Long,
            Self::Decimal(_) => TypeTag::Decimal,
            Self::Text(_) => TypeTag::String,
        }
    }

    /// Writes the value if it widens losslessly into the field type.
    /// Returns the value back when it does not.
    fn apply(&self, target: &mut T, value: TypedValue) -> Result<(), TypedValue> {
        match self {
            Self::Byte(set) => value.as_u8().map(|v| set(target, v)).ok_or(value),
            Self::Int(set) => value.as_i32().map(|v| set(target, v)).ok_or(value),
            Self::Long(set) => value.as_i64().map(|v| set(target, v)).ok_or(value),
            Self::Decimal(set) => match value {
                TypedValue::Decimal(v) => {
                    set(target, v);
                    Ok(())
                }
                other => Err(other),
            },
            Self::Text(set) => match value {
                TypedValue::String(v) => {
                    set(target, v);
                    Ok(())
                }
                other => Err(other),
            },
        }
    }
}

/// Name to setter mapping for one host type. Built once per type.
pub struct FieldTable<T> {
    fields: BTreeMap<&'static str, Setter<T>>,
}

impl<T> FieldTable<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn byte(self, name: &'static str, set: fn(&mut T, u8)) -> Self {
        self.with(name, Setter::Byte(set))
    }

    #[must_use]
    pub fn int(self, name: &'static str, set: fn(&mut T, i32)) -> Self {
        self.with(name, Setter::Int(set))
    }

    #[must_use]
    pub fn long(self, name: &'static str, set: fn(&mut T, i64)) -> Self {
        self.with(name, Setter::Long(set))
    }

    #[must_use]
    pub fn decimal(self, name: &'static str, set: fn(&mut T, BigDecimal)) -> Self {
        self.with(name, Setter::Decimal(set))
    }

    #[must_use]
    pub fn text(self, name: &'static str, set: fn(&mut T, String)) -> Self {
        self.with(name, Setter::Text(set))
    }

    fn with(mut self, name: &'static str, setter: Setter<T>) -> Self {
        self.fields.insert(name, setter);
        self
    }

    /// Field names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// The type a field is declared with, if it exists.
    pub fn expects(&self, field: &str) -> Option<TypeTag> {
        self.fields.get(field).map(Setter::expects)
    }

    /// Overwrites one field on `target`.
    pub fn set(&self, target: &mut T, field: &str, value: TypedValue) -> FieldResult<()> {
        let setter = self.fields.get(field).ok_or_else(|| FieldError::Unknown {
            field: field.to_string(),
        })?;
        setter
            .apply(target, value)
            .map_err(|rejected| FieldError::Mismatch {
                field: field.to_string(),
                expected: setter.expects(),
                found: rejected.tag(),
            })
    }
}

impl<T> Default for FieldTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FieldTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|(name, s)| (name, s.expects())))
            .finish()
    }
}
