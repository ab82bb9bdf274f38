//! Enum display labels, parsing and flag algebra.
//!
//! This crate provides:
//! - `labeled_enum!` for declaring integer-backed enums with optional
//!   per-member labels (`EnumReflect` is the trait it implements)
//! - Label resolution (`label_of`, `name_of`)
//! - Multi-strategy parsing (`parse`, `parse_ignore_case`, `parse_with`)
//! - Flag algebra generic over every backing width (`flags`, `EnumExt`)
//! - Runtime descriptors (`EnumTypeDescriptor`) and their process-wide cache
//!
//! ```rust
//! use blazing_enums::{EnumExt, labeled_enum, parse};
//!
//! labeled_enum! {
//!     pub enum Status: i32 {
//!         Active = 0,
//!         #[label = "Not Active"]
//!         Inactive = 1,
//!     }
//! }
//!
//! assert_eq!(Status::Inactive.label(), "Not Active");
//! assert_eq!(parse::<Status>("Not Active").unwrap(), Status::Inactive);
//! assert_eq!(parse::<Status>("500").unwrap().bits(), 500);
//! ```

pub use blazing_common::{EnumRepr, IntKind};

// Declaration macro
mod macros;

// Reflection surface published by each enum type
pub mod reflect;
pub use reflect::{EnumReflect, MemberDecl};

pub mod error;
pub use error::EnumError;

// Parse configuration
pub mod options;
pub use options::{NumericFallback, ParseOptions};

// Per-type summaries and the widened operations
pub mod descriptor;
pub use descriptor::{EnumMember, EnumTypeDescriptor};

// Process-wide descriptor cache
pub mod registry;
pub use registry::descriptor_of;

pub mod flags;

pub mod label;
pub use label::{label_of, name_of};

pub mod parser;
pub use parser::{parse, parse_ignore_case, parse_with, try_parse};

pub mod ext;
pub use ext::EnumExt;

// Enum types shared by the unit tests
#[cfg(test)]
#[path = "tests/fixtures.rs"]
pub(crate) mod fixtures;
