use proptest::prelude::*;
use retune_types::{BigDecimal, ConversionError, TypeTag, TypedValue, convert, convert_as};
use std::str::FromStr;

fn decimal(text: &str) -> BigDecimal {
    BigDecimal::from_str(text).unwrap()
}

// ── byte ─────────────────────────────────────────────────────────

#[test]
fn byte_accepts_digits() {
    assert_eq!(convert("byte", "0").unwrap(), TypedValue::Byte(0));
    assert_eq!(convert("byte", "255").unwrap(), TypedValue::Byte(255));
    assert_eq!(convert("byte", "007").unwrap(), TypedValue::Byte(7));
}

#[test]
fn byte_rejects_sign() {
    assert!(matches!(
        convert("byte", "-1"),
        Err(ConversionError::InvalidFormat { tag: TypeTag::Byte, .. })
    ));
    assert!(convert("byte", "+1").is_err());
}

#[test]
fn byte_overflow() {
    assert!(matches!(
        convert("byte", "256"),
        Err(ConversionError::Overflow { tag: TypeTag::Byte, .. })
    ));
}

#[test]
fn byte_empty() {
    assert_eq!(
        convert("byte", ""),
        Err(ConversionError::Empty { tag: TypeTag::Byte })
    );
}

// ── int ──────────────────────────────────────────────────────────

#[test]
fn int_accepts_leading_sign() {
    assert_eq!(convert("int", "-1").unwrap(), TypedValue::Int(-1));
    assert_eq!(convert("int", "+42").unwrap(), TypedValue::Int(42));
    assert_eq!(convert("int", "42").unwrap(), TypedValue::Int(42));
}

#[test]
fn int_range_bounds() {
    assert_eq!(convert("int", "2147483647").unwrap(), TypedValue::Int(i32::MAX));
    assert_eq!(convert("int", "-2147483648").unwrap(), TypedValue::Int(i32::MIN));
    assert!(matches!(
        convert("int", "2147483648"),
        Err(ConversionError::Overflow { .. })
    ));
    assert!(matches!(
        convert("int", "-2147483649"),
        Err(ConversionError::Overflow { .. })
    ));
}

#[test]
fn int_rejects_bare_or_double_sign() {
    assert!(convert("int", "-").is_err());
    assert!(convert("int", "+").is_err());
    assert!(convert("int", "+-5").is_err());
    assert!(convert("int", "--5").is_err());
}

#[test]
fn int_rejects_grouping_and_whitespace() {
    assert!(convert("int", "1,000").is_err());
    assert!(convert("int", "1 000").is_err());
    assert!(convert("int", " 5").is_err());
    assert!(convert("int", "5 ").is_err());
    assert!(convert("int", "1.0").is_err());
}

// ── long ─────────────────────────────────────────────────────────

#[test]
fn long_accepts_digits() {
    assert_eq!(
        convert("long", "9223372036854775807").unwrap(),
        TypedValue::Long(i64::MAX)
    );
    assert_eq!(convert("long", "200000").unwrap(), TypedValue::Long(200_000));
}

#[test]
fn long_rejects_sign() {
    assert!(convert("long", "-1").is_err());
    assert!(convert("long", "+1").is_err());
}

#[test]
fn long_overflow() {
    assert!(matches!(
        convert("long", "9223372036854775808"),
        Err(ConversionError::Overflow { tag: TypeTag::Long, .. })
    ));
}

// ── decimal ──────────────────────────────────────────────────────

#[test]
fn decimal_accepts_point() {
    assert_eq!(convert("decimal", "0.30").unwrap(), TypedValue::Decimal(decimal("0.30")));
    assert_eq!(convert("decimal", "12").unwrap(), TypedValue::Decimal(decimal("12")));
}

#[test]
fn decimal_keeps_exact_value() {
    let value = convert("decimal", "0.1").unwrap().into_decimal().unwrap();
    let sum = &value + &value + &value;
    assert_eq!(sum, decimal("0.3"));
}

#[test]
fn decimal_bare_point_edges() {
    assert_eq!(convert("decimal", ".5").unwrap(), TypedValue::Decimal(decimal("0.5")));
    assert_eq!(convert("decimal", "5.").unwrap(), TypedValue::Decimal(decimal("5")));
    assert!(convert("decimal", ".").is_err());
}

#[test]
fn decimal_rejects_grouping_sign_and_second_point() {
    assert!(convert("decimal", "1,000").is_err());
    assert!(convert("decimal", "-0.5").is_err());
    assert!(convert("decimal", "+0.5").is_err());
    assert!(convert("decimal", "1.2.3").is_err());
    assert!(convert("decimal", "1e5").is_err());
    assert!(convert("decimal", "0,3").is_err());
}

// ── string ───────────────────────────────────────────────────────

#[test]
fn string_is_verbatim() {
    assert_eq!(
        convert("string", " spaced, text ").unwrap(),
        TypedValue::String(" spaced, text ".into())
    );
    assert_eq!(convert("string", "").unwrap(), TypedValue::String(String::new()));
}

#[test]
fn unknown_tag_falls_back_to_string() {
    assert_eq!(convert("float", "1.5").unwrap(), TypedValue::String("1.5".into()));
    assert_eq!(convert("INT", "-1").unwrap(), TypedValue::String("-1".into()));
}

#[test]
fn convert_as_matches_convert() {
    assert_eq!(convert_as(TypeTag::Int, "-7"), convert("int", "-7"));
}

#[test]
fn error_reports_tag() {
    let err = convert("long", "x").unwrap_err();
    assert_eq!(err.tag(), TypeTag::Long);
    assert!(err.to_string().contains("long"));
}

// ── properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn int_text_roundtrips(n in any::<i32>(), plus in any::<bool>()) {
        let text = if plus && n >= 0 { format!("+{n}") } else { n.to_string() };
        let first = convert("int", &text).unwrap();
        let rendered = first.to_string();
        let second = convert("int", &rendered).unwrap();
        prop_assert_eq!(first, TypedValue::Int(n));
        prop_assert_eq!(second, TypedValue::Int(n));
    }

    #[test]
    fn negative_only_for_int(n in 1i64..=i64::from(u8::MAX)) {
        let text = format!("-{n}");
        prop_assert!(convert("byte", &text).is_err());
        prop_assert!(convert("long", &text).is_err());
        prop_assert!(convert("decimal", &text).is_err());
        prop_assert_eq!(convert("int", &text).unwrap(), TypedValue::Int(-(n as i32)));
    }

    #[test]
    fn long_accepts_all_non_negative(n in 0i64..=i64::MAX) {
        prop_assert_eq!(convert("long", &n.to_string()).unwrap(), TypedValue::Long(n));
    }

    #[test]
    fn string_never_fails(text in ".*") {
        prop_assert_eq!(convert("string", &text).unwrap(), TypedValue::String(text.clone()));
    }
}
