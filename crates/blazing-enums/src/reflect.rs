//! The reflection surface an enum type publishes.
//!
//! Rust has no runtime attribute introspection, so every enum type hands
//! out a static member table instead. `labeled_enum!` writes that table for
//! you; implementing `EnumReflect` by hand works just as well as long as
//! the table never changes.

use blazing_common::EnumRepr;

/// Static declaration of one enum member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberDecl<R> {
    /// Symbolic name, unique within the enum type.
    pub name: &'static str,
    pub value: R,
    /// Optional human-readable label.
    pub label: Option<&'static str>,
}

impl<R> MemberDecl<R> {
    pub const fn new(name: &'static str, value: R, label: Option<&'static str>) -> Self {
        MemberDecl { name, value, label }
    }
}

/// An enum type whose members can be listed and whose values convert to
/// and from a fixed-width backing integer.
///
/// The value domain is every integer of the backing width, not only the
/// declared members: `from_repr` must accept any bit pattern.
pub trait EnumReflect: Copy + Send + Sync + 'static {
    /// Backing integer.
    type Repr: EnumRepr;

    const TYPE_NAME: &'static str;

    /// Whether values combine as bitmasks.
    const IS_FLAGS: bool;

    /// All declared members, in declaration order.
    fn members() -> &'static [MemberDecl<Self::Repr>];

    /// Unchecked conversion from the backing integer.
    fn from_repr(repr: Self::Repr) -> Self;

    fn to_repr(self) -> Self::Repr;
}
