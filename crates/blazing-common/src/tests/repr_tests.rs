use super::*;

#[test]
fn test_kind_widths_and_masks() {
    assert_eq!(IntKind::U8.bits(), 8);
    assert_eq!(IntKind::I16.bits(), 16);
    assert_eq!(IntKind::U64.bits(), 64);
    assert_eq!(IntKind::U8.mask(), 0xFF);
    assert_eq!(IntKind::I32.mask(), 0xFFFF_FFFF);
    assert_eq!(IntKind::I64.mask(), u64::MAX);
    assert!(IntKind::I8.is_signed());
    assert!(!IntKind::U32.is_signed());
}

#[test]
fn test_widen_preserves_value() {
    assert_eq!(255u8.widen(), 255);
    assert_eq!((-128i8).widen(), -128);
    assert_eq!(u32::MAX.widen(), 4_294_967_295);
    assert_eq!(i64::MIN.widen(), i64::MIN);
}

#[test]
fn test_widen_u64_reinterprets_bits() {
    let high = 1u64 << 63;
    assert_eq!(high.widen(), i64::MIN);
    assert_eq!(u64::narrow(high.widen()), high);
    assert_eq!(u64::narrow(u64::MAX.widen()), u64::MAX);
}

#[test]
fn test_narrow_truncates_to_width() {
    assert_eq!(u8::narrow(0x1FF), 0xFF);
    assert_eq!(u8::narrow(-1), 0xFF);
    assert_eq!(i8::narrow(0x80), -128);
    assert_eq!(u16::narrow(0x1_0001), 1);
}

#[test]
fn test_kind_narrow_matches_typed_narrow() {
    for value in [-300i64, -129, -1, 0, 1, 127, 128, 255, 256, 70_000] {
        assert_eq!(IntKind::U8.narrow(value), u8::narrow(value).widen());
        assert_eq!(IntKind::I8.narrow(value), i8::narrow(value).widen());
        assert_eq!(IntKind::U16.narrow(value), u16::narrow(value).widen());
        assert_eq!(IntKind::I32.narrow(value), i32::narrow(value).widen());
    }
}

#[test]
fn test_bit_pattern_masks_sign_extension() {
    assert_eq!(IntKind::I8.bit_pattern(-1), 0xFF);
    assert_eq!(IntKind::I16.bit_pattern(-2), 0xFFFE);
    assert_eq!(IntKind::U64.bit_pattern(-1), u64::MAX);
}

#[test]
fn test_format_uses_signedness() {
    assert_eq!(IntKind::U8.format(255), "255");
    assert_eq!(IntKind::I8.format(-1), "-1");
    assert_eq!(IntKind::I8.format(255), "-1");
    assert_eq!(IntKind::U64.format(-1), "18446744073709551615");
    assert_eq!(IntKind::I64.format(-1), "-1");
}

#[test]
fn test_parse_literal_range_checks() {
    assert_eq!(IntKind::U8.parse_literal("255"), Some(255));
    assert_eq!(IntKind::U8.parse_literal("256"), None);
    assert_eq!(IntKind::U8.parse_literal("-1"), None);
    assert_eq!(IntKind::I8.parse_literal("-128"), Some(-128));
    assert_eq!(IntKind::I32.parse_literal("+500"), Some(500));
    assert_eq!(IntKind::I32.parse_literal("5 00"), None);
    assert_eq!(IntKind::I32.parse_literal("0x10"), None);
    assert_eq!(
        IntKind::U64.parse_literal("18446744073709551615"),
        Some(-1)
    );
}

#[test]
fn test_typed_parse_literal() {
    assert_eq!(u16::parse_literal("65535"), Some(u16::MAX));
    assert_eq!(i16::parse_literal("-32768"), Some(i16::MIN));
    assert_eq!(u32::parse_literal("abc"), None);
}

#[test]
fn test_kind_serializes_lowercase() {
    let json = serde_json::to_string(&IntKind::U16).unwrap();
    assert_eq!(json, "\"u16\"");
    let kind: IntKind = serde_json::from_str("\"i64\"").unwrap();
    assert_eq!(kind, IntKind::I64);
    assert_eq!(kind.to_string(), "i64");
}
