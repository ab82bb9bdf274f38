use super::*;

#[test]
fn test_add_flag_sets_bits() {
    assert_eq!(add_flag(0b0001u8, 0b0100), 0b0101);
    assert_eq!(add_flag(0i32, 6), 6);
}

#[test]
fn test_add_flag_is_idempotent() {
    for value in [0u16, 1, 0x00F0, 0xFFFF] {
        for flag in [1u16, 0x0F00, 0x8001] {
            let once = add_flag(value, flag);
            assert_eq!(add_flag(once, flag), once);
        }
    }
}

#[test]
fn test_remove_flag_clears_bits() {
    assert_eq!(remove_flag(0b0111u8, 0b0010), 0b0101);
    assert_eq!(remove_flag(4u32, 4), 0);
}

#[test]
fn test_remove_flag_absent_is_noop() {
    assert_eq!(remove_flag(0b0101u8, 0b0010), 0b0101);
    assert_eq!(remove_flag(0i64, 1 << 40), 0);
}

#[test]
fn test_remove_flag_partial_overlap_clears_overlap() {
    assert_eq!(remove_flag(0b0011u8, 0b0110), 0b0001);
}

#[test]
fn test_remove_flag_is_idempotent() {
    for value in [0i32, 7, -1, i32::MIN] {
        for flag in [1i32, 6, i32::MIN] {
            let once = remove_flag(value, flag);
            assert_eq!(remove_flag(once, flag), once);
        }
    }
}

#[test]
fn test_add_after_remove_equals_add() {
    for value in [0u8, 1, 0x5A, 0xFF] {
        for flag in [0u8, 1, 0x0F, 0xF0, 0xFF] {
            assert_eq!(
                add_flag(remove_flag(value, flag), flag),
                add_flag(value, flag)
            );
        }
    }
}

#[test]
fn test_u8_full_width() {
    assert_eq!(remove_flag(255u8, 255), 0);
    assert_eq!(add_flag(0u8, 255), 255);
    assert_eq!(add_flag(0x0Fu8, 0xF0), 0xFF);
}

#[test]
fn test_u64_sign_boundary() {
    let high = 1u64 << 63;
    assert_eq!(add_flag(1u64, high), high | 1);
    assert_eq!(remove_flag(u64::MAX, high), u64::MAX >> 1);
    assert_eq!(remove_flag(high | 1, 1), high);
    assert!(has_flag(u64::MAX, high));
    assert!(!has_flag(1u64, high));
}

#[test]
fn test_signed_top_bit() {
    assert_eq!(add_flag(1i8, i8::MIN), -127);
    assert_eq!(remove_flag(-127i8, i8::MIN), 1);
    assert_eq!(remove_flag(-1i8, 1), -2);
    assert_eq!(add_flag(i16::MAX, i16::MIN), -1);
}

#[test]
fn test_set_flag_dispatches() {
    assert_eq!(set_flag(0b001u8, 0b100, true), 0b101);
    assert_eq!(set_flag(0b101u8, 0b100, false), 0b001);
}

#[test]
fn test_has_flag_zero_flag() {
    assert!(has_flag(0u32, 0));
    assert!(has_flag(5u32, 0));
}

#[test]
fn test_widened_helpers_mask_inputs() {
    // Inputs outside the width are normalised before combining.
    assert_eq!(add_widened(IntKind::U8, 0x100, 1), 1);
    assert_eq!(remove_widened(IntKind::U8, 0x1FF, 0xFF), 0);
    assert!(has_widened(IntKind::U8, 0xFF, -1));
    assert_eq!(set_widened(IntKind::I8, 0, 0x80, true), -128);
}
