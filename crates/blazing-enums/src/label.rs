//! Display labels for typed enum values.

use crate::reflect::EnumReflect;
use crate::registry::descriptor_of;
use blazing_common::EnumRepr;
use std::borrow::Cow;

/// The display label of `value`.
///
/// Returns the label of the member declared with exactly this value if it
/// has one, otherwise the symbolic name (see `name_of`). Never fails:
/// undeclared values render as combinations of flag names or as decimal
/// integers.
pub fn label_of<E: EnumReflect>(value: E) -> Cow<'static, str> {
    descriptor_of::<E>().label_of(value.to_repr().widen())
}

/// The symbolic name of `value`, ignoring labels.
///
/// This is what `Display` prints for types declared with `labeled_enum!`.
pub fn name_of<E: EnumReflect>(value: E) -> Cow<'static, str> {
    descriptor_of::<E>().name_of(value.to_repr().widen())
}

#[cfg(test)]
#[path = "tests/label_tests.rs"]
mod label_tests;
