//! Typed parameter values.
//!
//! Accessors only widen losslessly: a `Byte` can be read as `i32` or `i64`,
//! an `Int` as `i64`. Nothing narrows, and decimals are never produced from
//! integers or the other way round.

use crate::TypeTag;
use bigdecimal::BigDecimal;
use std::fmt;

/// A parameter value after successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypedValue {
    Byte(u8),
    Int(i32),
    Long(i64),
    Decimal(BigDecimal),
    String(String),
}

impl TypedValue {
    /// The tag this value was converted under.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::Byte(_) => TypeTag::Byte,
            Self::Int(_) => TypeTag::Int,
            Self::Long(_) => TypeTag::Long,
            Self::Decimal(_) => TypeTag::Decimal,
            Self::String(_) => TypeTag::String,
        }
    }

    #[must_use]
    pub const fn as_u8(&self) -> Option<u8> {
        match self {
            Self::Byte(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Byte(v) => Some(*v as i32),
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Byte(v) => Some(*v as i64),
            Self::Int(v) => Some(*v as i64),
            Self::Long(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_decimal(&self) -> Option<&BigDecimal> {
        match self {
            Self::Decimal(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Consumes the value, returning the decimal if it is one.
    #[must_use]
    pub fn into_decimal(self) -> Option<BigDecimal> {
        match self {
            Self::Decimal(v) => Some(v),
            _ => None,
        }
    }

    /// Consumes the value, returning the string if it is one.
    #[must_use]
    pub fn into_string(self) -> Option<String> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
        }
    }
}
