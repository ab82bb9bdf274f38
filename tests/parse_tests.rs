//! Parse strategy chain through the public facade.

use blazing::{
    EnumError, EnumExt, NumericFallback, ParseOptions, label_of, labeled_enum, parse,
    parse_ignore_case, parse_with, try_parse,
};

labeled_enum! {
    #[flags]
    pub enum Perm: u8 {
        Read = 1,
        Write = 2,
        Exec = 4,
        All = 7,
    }
}

labeled_enum! {
    #[flags]
    pub enum FlagsEnum: i64 {
        Bit1 = 1,
        Bit2 = 2,
        #[label = "fourth bit set"]
        Bit4 = 4,
    }
}

labeled_enum! {
    pub enum Level: i8 {
        #[label = "Very low"]
        Lowest = -2,
        Low = -1,
        Normal = 0,
        High = 1,
    }
}

#[test]
fn test_combination_scenario() {
    let perm = parse::<Perm>("Read, Write").unwrap();
    assert_eq!(perm, Perm::Read | Perm::Write);
    assert_eq!(perm.bits(), 3);
}

#[test]
fn test_unknown_text_scenario() {
    match parse::<Perm>("Delete") {
        Err(EnumError::InvalidArgument { text, type_name }) => {
            assert_eq!(text, "Delete");
            assert_eq!(type_name, "Perm");
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_case_sensitivity_property() {
    assert!(matches!(
        parse::<FlagsEnum>("bit1"),
        Err(EnumError::InvalidArgument { .. })
    ));
    assert_eq!(
        parse_ignore_case::<FlagsEnum>("bit1"),
        parse::<FlagsEnum>("Bit1")
    );
}

#[test]
fn test_numeric_fallback_property() {
    let value = parse::<Perm>("200").unwrap();
    assert_eq!(value.bits(), 200);
    assert!(!value.is_defined());
    let level = parse::<Level>("100").unwrap();
    assert_eq!(level.bits(), 100);
}

#[test]
fn test_signed_ordinal_members() {
    assert_eq!(parse::<Level>("-1"), Ok(Level::Low));
    assert_eq!(parse::<Level>("Very low"), Ok(Level::Lowest));
    assert_eq!(parse::<Level>("-128").map(|l| l.bits()), Ok(-128));
    assert!(parse::<Level>("-129").is_err());
    assert_eq!(label_of(Level::from_bits(-100)), "-100");
}

#[test]
fn test_zero_value_is_not_an_error() {
    let zero = parse::<Perm>("0").unwrap();
    assert_eq!(zero.bits(), 0);
}

#[test]
fn test_round_trip_property() {
    for value in [FlagsEnum::Bit1, FlagsEnum::Bit2, FlagsEnum::Bit4] {
        assert_eq!(parse::<FlagsEnum>(&label_of(value)), Ok(value));
    }
    for value in [Level::Lowest, Level::Low, Level::Normal, Level::High] {
        assert_eq!(parse::<Level>(&label_of(value)), Ok(value));
    }
}

#[test]
fn test_options_from_config() {
    let options = ParseOptions::from_json(r#"{ "ignoreCase": true }"#).unwrap();
    assert_eq!(parse_with::<Perm>("EXEC", options), Ok(Perm::Exec));
    let strict = options.with_numeric_fallback(NumericFallback::DeclaredOnlyForOrdinal);
    assert!(parse_with::<Level>("5", strict).is_err());
    assert_eq!(parse_with::<Level>("1", strict), Ok(Level::High));
    assert_eq!(try_parse::<Level>("very LOW", true), Some(Level::Lowest));
}
