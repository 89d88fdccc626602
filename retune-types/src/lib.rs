//! Core type definitions for retune.
//!
//! This crate defines the leaf types every other crate builds on:
//! - [`TypeTag`]: the declared kind of a parameter value
//! - [`TypedValue`]: a parameter value after conversion
//! - [`convert`]: the locale-invariant grammar turning raw text into a typed value
//!
//! Conversion failures are recoverable: callers log them and skip the one
//! parameter that failed.

mod convert;
mod tag;
mod value;

pub use bigdecimal::BigDecimal;
pub use convert::{convert, convert_as};
pub use tag::TypeTag;
pub use value::TypedValue;

/// Result type alias for value conversion.
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;

/// Errors produced when raw text does not match the grammar of its type tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("empty {tag} value")]
    Empty { tag: TypeTag },

    #[error("invalid {tag} value {raw:?}")]
    InvalidFormat { tag: TypeTag, raw: String },

    #[error("{tag} value {raw:?} is out of range")]
    Overflow { tag: TypeTag, raw: String },
}

impl ConversionError {
    /// The type tag the failed conversion was attempted for.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::Empty { tag } | Self::InvalidFormat { tag, .. } | Self::Overflow { tag, .. } => {
                *tag
            }
        }
    }
}
