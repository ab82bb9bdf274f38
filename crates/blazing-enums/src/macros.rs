//! `labeled_enum!`: declare an enum type with labels and reflection.

/// Declare an enum type backed by a fixed-width integer.
///
/// The generated type is a `#[repr(transparent)]` newtype over the backing
/// integer, so any integer of that width is a valid value. Each member
/// becomes an associated constant named exactly as declared, which is also
/// its symbolic name for parsing and display. A member may carry a
/// `#[label = "..."]` attribute. A leading `#[flags]` marks a bitmask enum
/// and adds the `|`, `&` and `|=` operators.
///
/// Every member needs an explicit value. Inside the braces, `Self` names
/// the type being declared, so aliases can be spelled in terms of other
/// members with the `const fn bits`.
///
/// # Examples
///
/// ```rust
/// use blazing_enums::{EnumExt, labeled_enum};
///
/// labeled_enum! {
///     /// File permissions.
///     #[flags]
///     pub enum Perm: u8 {
///         Read = 1,
///         Write = 2,
///         #[label = "Execute"]
///         Exec = 4,
///         All = Self::Read.bits() | Self::Write.bits() | Self::Exec.bits(),
///     }
/// }
///
/// assert_eq!(Perm::Exec.label(), "Execute");
/// assert_eq!("Read, Write".parse::<Perm>().unwrap(), Perm::Read | Perm::Write);
/// assert_eq!((Perm::Read | Perm::Write | Perm::Exec).label(), "All");
/// ```
///
/// Duplicate member names are rejected at compile time:
///
/// ```compile_fail
/// blazing_enums::labeled_enum! {
///     pub enum Twice: i32 {
///         A = 0,
///         A = 1,
///     }
/// }
/// ```
#[macro_export]
macro_rules! labeled_enum {
    (
        @emit $flags:tt;
        $(#[doc = $doc:literal])*
        $vis:vis $Name:ident : $Repr:ty {
            $(
                $(#[doc = $mdoc:literal])*
                [$($label:literal)?] $Member:ident = $value:expr
            ),*
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[repr(transparent)]
        $vis struct $Name($Repr);

        #[allow(non_upper_case_globals, dead_code)]
        impl $Name {
            $(
                $(#[doc = $mdoc])*
                pub const $Member: Self = Self($value);
            )*

            /// Wrap a raw backing value without checking it against the
            /// declared members.
            #[inline]
            pub const fn from_bits(bits: $Repr) -> Self {
                Self(bits)
            }

            #[inline]
            pub const fn bits(self) -> $Repr {
                self.0
            }
        }

        impl $crate::EnumReflect for $Name {
            type Repr = $Repr;

            const TYPE_NAME: &'static str = ::core::stringify!($Name);
            const IS_FLAGS: bool = $flags;

            fn members() -> &'static [$crate::MemberDecl<$Repr>] {
                const MEMBERS: &[$crate::MemberDecl<$Repr>] = &[
                    $(
                        $crate::MemberDecl::new(
                            ::core::stringify!($Member),
                            $Name::$Member.bits(),
                            $crate::__member_label!($($label)?),
                        )
                    ),*
                ];
                MEMBERS
            }

            #[inline]
            fn from_repr(repr: $Repr) -> Self {
                Self(repr)
            }

            #[inline]
            fn to_repr(self) -> $Repr {
                self.0
            }
        }

        impl ::core::fmt::Debug for $Name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let name = $crate::name_of(*self);
                f.debug_tuple(::core::stringify!($Name))
                    .field(&::core::format_args!("{}", name))
                    .finish()
            }
        }

        impl ::core::fmt::Display for $Name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::name_of(*self))
            }
        }

        impl ::core::str::FromStr for $Name {
            type Err = $crate::EnumError;

            fn from_str(text: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::parse(text)
            }
        }
    };

    (
        $(#[doc = $doc:literal])*
        #[flags]
        $vis:vis enum $Name:ident : $Repr:ty {
            $(
                $(#[doc = $mdoc:literal])*
                $(#[label = $label:literal])?
                $Member:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $crate::labeled_enum! {
            @emit true;
            $(#[doc = $doc])*
            $vis $Name : $Repr {
                $( $(#[doc = $mdoc])* [$($label)?] $Member = $value ),*
            }
        }

        impl ::core::ops::BitOr for $Name {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::core::ops::BitAnd for $Name {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl ::core::ops::BitOrAssign for $Name {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }
    };

    (
        $(#[doc = $doc:literal])*
        $vis:vis enum $Name:ident : $Repr:ty {
            $(
                $(#[doc = $mdoc:literal])*
                $(#[label = $label:literal])?
                $Member:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $crate::labeled_enum! {
            @emit false;
            $(#[doc = $doc])*
            $vis $Name : $Repr {
                $( $(#[doc = $mdoc])* [$($label)?] $Member = $value ),*
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __member_label {
    () => {
        ::core::option::Option::None
    };
    ($label:literal) => {
        ::core::option::Option::Some($label)
    };
}
