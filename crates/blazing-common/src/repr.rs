//! Backing integer representations for enum types.
//!
//! Every enum value is stored as one of the eight fixed-width integers. To
//! run a single algorithm over all of them, values are *widened* to `i64`
//! (sign-extending signed types, zero-extending unsigned ones, and
//! reinterpreting `u64` bit-for-bit) and *narrowed* back by truncating to the
//! backing width. Narrowing is what keeps results inside the width: an `u8`
//! backed value can never come back as `256` or `-1`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Width and signedness of an enum's backing integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
}

impl IntKind {
    /// Number of bits in the backing integer.
    pub const fn bits(self) -> u32 {
        match self {
            IntKind::I8 | IntKind::U8 => 8,
            IntKind::I16 | IntKind::U16 => 16,
            IntKind::I32 | IntKind::U32 => 32,
            IntKind::I64 | IntKind::U64 => 64,
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            IntKind::I8 | IntKind::I16 | IntKind::I32 | IntKind::I64
        )
    }

    /// All bits representable by this width, as an unsigned pattern.
    pub const fn mask(self) -> u64 {
        match self.bits() {
            64 => u64::MAX,
            bits => (1u64 << bits) - 1,
        }
    }

    /// Truncate a widened value to this width and widen it again.
    ///
    /// This is the canonical form of a widened value: two widened values
    /// denote the same backing integer iff their narrowed forms are equal.
    #[inline]
    pub const fn narrow(self, value: i64) -> i64 {
        match self {
            IntKind::I8 => value as i8 as i64,
            IntKind::U8 => value as u8 as i64,
            IntKind::I16 => value as i16 as i64,
            IntKind::U16 => value as u16 as i64,
            IntKind::I32 => value as i32 as i64,
            IntKind::U32 => value as u32 as i64,
            IntKind::I64 | IntKind::U64 => value,
        }
    }

    /// The raw bit pattern of a widened value, masked to this width.
    #[inline]
    pub const fn bit_pattern(self, value: i64) -> u64 {
        (value as u64) & self.mask()
    }

    /// Decimal rendering of a widened value in this width's signedness.
    ///
    /// `u64` values above `i64::MAX` are widened to negative numbers; they
    /// still print as their unsigned magnitude here.
    pub fn format(self, value: i64) -> String {
        match self {
            IntKind::U64 => (value as u64).to_string(),
            _ => self.narrow(value).to_string(),
        }
    }

    /// Parse a decimal integer literal that fits this width.
    ///
    /// Accepts an optional leading sign. Out-of-range literals are rejected
    /// rather than wrapped.
    pub fn parse_literal(self, text: &str) -> Option<i64> {
        match self {
            IntKind::I8 => text.parse::<i8>().ok().map(i64::from),
            IntKind::U8 => text.parse::<u8>().ok().map(i64::from),
            IntKind::I16 => text.parse::<i16>().ok().map(i64::from),
            IntKind::U16 => text.parse::<u16>().ok().map(i64::from),
            IntKind::I32 => text.parse::<i32>().ok().map(i64::from),
            IntKind::U32 => text.parse::<u32>().ok().map(i64::from),
            IntKind::I64 => text.parse::<i64>().ok(),
            IntKind::U64 => text.parse::<u64>().ok().map(|v| v as i64),
        }
    }

    /// The Rust spelling of the backing type.
    pub const fn name(self) -> &'static str {
        match self {
            IntKind::I8 => "i8",
            IntKind::U8 => "u8",
            IntKind::I16 => "i16",
            IntKind::U16 => "u16",
            IntKind::I32 => "i32",
            IntKind::U32 => "u32",
            IntKind::I64 => "i64",
            IntKind::U64 => "u64",
        }
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed-width integer usable as an enum's backing storage.
///
/// # Examples
///
/// ```rust
/// use blazing_common::{EnumRepr, IntKind};
///
/// assert_eq!(u8::KIND, IntKind::U8);
/// assert_eq!(200u8.widen(), 200);
/// assert_eq!((-1i8).widen(), -1);
/// assert_eq!(u64::MAX.widen(), -1);
/// assert_eq!(u8::narrow(0x1FF), 0xFF);
/// ```
pub trait EnumRepr:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Width and signedness of `Self`.
    const KIND: IntKind;

    /// Widen to `i64` without losing bits.
    fn widen(self) -> i64;

    /// Narrow a widened value back, truncating bits above the width.
    fn narrow(value: i64) -> Self;

    /// Parse a decimal literal in range for `Self`.
    #[inline]
    fn parse_literal(text: &str) -> Option<Self> {
        Self::KIND.parse_literal(text).map(Self::narrow)
    }
}

macro_rules! impl_enum_repr {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl EnumRepr for $t {
                const KIND: IntKind = IntKind::$kind;

                #[inline(always)]
                fn widen(self) -> i64 {
                    self as i64
                }

                #[inline(always)]
                fn narrow(value: i64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_enum_repr! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
}

#[cfg(test)]
#[path = "tests/repr_tests.rs"]
mod repr_tests;
