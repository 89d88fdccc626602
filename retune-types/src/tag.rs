use std::fmt;

/// The declared kind of a parameter value.
///
/// Documents carry the tag as free text. Only the four numeric tags are
/// recognised; every other tag (including an unknown one) means `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Unsigned 8-bit integer, no sign.
    Byte,
    /// Signed 32-bit integer, optional leading `+`/`-`.
    Int,
    /// Signed 64-bit integer, no sign.
    Long,
    /// Arbitrary-precision decimal, no sign.
    Decimal,
    /// Verbatim text.
    String,
}

impl TypeTag {
    /// Resolves a document tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "byte" => Self::Byte,
            "int" => Self::Int,
            "long" => Self::Long,
            "decimal" => Self::Decimal,
            _ => Self::String,
        }
    }

    /// The canonical document spelling of this tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Int => "int",
            Self::Long => "long",
            Self::Decimal => "decimal",
            Self::String => "string",
        }
    }

    /// Returns true for the tags with a numeric grammar.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::String)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
