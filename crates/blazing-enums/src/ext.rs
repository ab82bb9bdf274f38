//! Method-call syntax for every reflected enum type.

use crate::flags;
use crate::label;
use crate::reflect::EnumReflect;
use crate::registry::descriptor_of;
use blazing_common::EnumRepr;
use std::borrow::Cow;

/// Extension methods available on any `EnumReflect` type.
///
/// The flag methods work on ordinal enums too; they simply operate on the
/// backing bits.
pub trait EnumExt: EnumReflect {
    /// See [`label_of`](crate::label_of).
    fn label(self) -> Cow<'static, str> {
        label::label_of(self)
    }

    /// See [`name_of`](crate::name_of).
    fn name(self) -> Cow<'static, str> {
        label::name_of(self)
    }

    /// Whether the value equals some declared member.
    fn is_defined(self) -> bool {
        descriptor_of::<Self>().is_defined(self.to_repr().widen())
    }

    #[must_use]
    fn add_flag(self, flag: Self) -> Self {
        Self::from_repr(flags::add_flag(self.to_repr(), flag.to_repr()))
    }

    #[must_use]
    fn remove_flag(self, flag: Self) -> Self {
        Self::from_repr(flags::remove_flag(self.to_repr(), flag.to_repr()))
    }

    #[must_use]
    fn set_flag(self, flag: Self, enabled: bool) -> Self {
        Self::from_repr(flags::set_flag(self.to_repr(), flag.to_repr(), enabled))
    }

    fn has_flag(self, flag: Self) -> bool {
        flags::has_flag(self.to_repr(), flag.to_repr())
    }
}

impl<E: EnumReflect> EnumExt for E {}

#[cfg(test)]
#[path = "tests/ext_tests.rs"]
mod ext_tests;
