//! Flag algebra over any backing width.
//!
//! There is exactly one implementation of each operation, written against
//! widened `i64` values and an `IntKind`: widen, combine bits, narrow. The
//! typed functions below and the `EnumExt` methods are thin wrappers that
//! supply `R::KIND`.
//!
//! Narrowing truncates to the backing width, so bits outside it can never
//! leak into a result. Sign extension is harmless: the bits above the width
//! are a pure function of the top bit, and every operation here is bitwise.

use blazing_common::{EnumRepr, IntKind};

/// Set every bit of `flag` in `value`.
///
/// Returns `value` unchanged when all of `flag` is already set.
///
/// # Examples
///
/// ```rust
/// use blazing_enums::flags::add_flag;
///
/// assert_eq!(add_flag(0b001u8, 0b100), 0b101);
/// assert_eq!(add_flag(0u8, 255), 255);
/// assert_eq!(add_flag(1u64 << 63, 1), (1u64 << 63) | 1);
/// ```
#[inline]
pub fn add_flag<R: EnumRepr>(value: R, flag: R) -> R {
    R::narrow(add_widened(R::KIND, value.widen(), flag.widen()))
}

/// Clear every bit of `flag` in `value`.
///
/// Returns `value` unchanged when none of `flag` is set.
///
/// # Examples
///
/// ```rust
/// use blazing_enums::flags::remove_flag;
///
/// assert_eq!(remove_flag(0b101u8, 0b100), 0b001);
/// assert_eq!(remove_flag(255u8, 255), 0);
/// assert_eq!(remove_flag(-1i8, i8::MIN), i8::MAX);
/// ```
#[inline]
pub fn remove_flag<R: EnumRepr>(value: R, flag: R) -> R {
    R::narrow(remove_widened(R::KIND, value.widen(), flag.widen()))
}

/// `add_flag` when `enabled`, otherwise `remove_flag`.
#[inline]
pub fn set_flag<R: EnumRepr>(value: R, flag: R, enabled: bool) -> R {
    R::narrow(set_widened(R::KIND, value.widen(), flag.widen(), enabled))
}

/// Whether every bit of `flag` is set in `value`.
///
/// A zero `flag` is always contained.
#[inline]
pub fn has_flag<R: EnumRepr>(value: R, flag: R) -> bool {
    has_widened(R::KIND, value.widen(), flag.widen())
}

pub(crate) fn add_widened(kind: IntKind, value: i64, flag: i64) -> i64 {
    let (value, flag) = (kind.narrow(value), kind.narrow(flag));
    if value & flag == flag {
        return value;
    }
    kind.narrow(value | flag)
}

pub(crate) fn remove_widened(kind: IntKind, value: i64, flag: i64) -> i64 {
    let (value, flag) = (kind.narrow(value), kind.narrow(flag));
    if value & flag == 0 {
        return value;
    }
    kind.narrow(value & !flag)
}

pub(crate) fn set_widened(kind: IntKind, value: i64, flag: i64, enabled: bool) -> i64 {
    if enabled {
        add_widened(kind, value, flag)
    } else {
        remove_widened(kind, value, flag)
    }
}

pub(crate) fn has_widened(kind: IntKind, value: i64, flag: i64) -> bool {
    let (value, flag) = (kind.narrow(value), kind.narrow(flag));
    value & flag == flag
}

#[cfg(test)]
#[path = "tests/flags_tests.rs"]
mod flags_tests;
