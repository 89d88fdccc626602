//! Raw text to typed value conversion.
//!
//! The grammar is locale-invariant: `.` is the only decimal separator and no
//! grouping separators or surrounding whitespace are accepted. Only `int`
//! takes a sign; `byte`, `long` and `decimal` are digits only.

use crate::{ConversionError, ConversionResult, TypeTag, TypedValue};
use bigdecimal::BigDecimal;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

/// Converts `raw` according to the document tag `tag`.
///
/// Unknown tags fall back to `string`, which never fails.
pub fn convert(tag: &str, raw: &str) -> ConversionResult<TypedValue> {
    convert_as(TypeTag::from_tag(tag), raw)
}

/// Converts `raw` according to an already resolved tag.
pub fn convert_as(tag: TypeTag, raw: &str) -> ConversionResult<TypedValue> {
    match tag {
        TypeTag::Byte => parse_integer::<u8>(tag, raw, raw).map(TypedValue::Byte),
        TypeTag::Int => {
            let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
            parse_integer::<i32>(tag, raw, digits).map(TypedValue::Int)
        }
        TypeTag::Long => parse_integer::<i64>(tag, raw, raw).map(TypedValue::Long),
        TypeTag::Decimal => parse_decimal(raw).map(TypedValue::Decimal),
        TypeTag::String => Ok(TypedValue::String(raw.to_owned())),
    }
}

/// Parses `raw` once `digits` (the part after any permitted sign) has been
/// checked to be plain ASCII digits.
fn parse_integer<T>(tag: TypeTag, raw: &str, digits: &str) -> ConversionResult<T>
where
    T: FromStr<Err = ParseIntError>,
{
    if raw.is_empty() {
        return Err(ConversionError::Empty { tag });
    }
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(tag, raw));
    }

    raw.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConversionError::Overflow {
            tag,
            raw: raw.to_owned(),
        },
        _ => invalid(tag, raw),
    })
}

fn parse_decimal(raw: &str) -> ConversionResult<BigDecimal> {
    let tag = TypeTag::Decimal;
    if raw.is_empty() {
        return Err(ConversionError::Empty { tag });
    }

    let mut points = 0usize;
    let mut digits = 0usize;
    for b in raw.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => points += 1,
            _ => return Err(invalid(tag, raw)),
        }
    }
    if digits == 0 || points > 1 {
        return Err(invalid(tag, raw));
    }

    // ".5" and "5." are accepted; normalise them before handing off.
    let normalised = match (raw.starts_with('.'), raw.strip_suffix('.')) {
        (true, _) => format!("0{raw}"),
        (false, Some(whole)) => whole.to_owned(),
        (false, None) => raw.to_owned(),
    };

    BigDecimal::from_str(&normalised).map_err(|_| invalid(tag, raw))
}

fn invalid(tag: TypeTag, raw: &str) -> ConversionError {
    ConversionError::InvalidFormat {
        tag,
        raw: raw.to_owned(),
    }
}
