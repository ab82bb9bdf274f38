//! blazing: enum display labels, parsing and flag algebra.
//!
//! This is the facade crate. It re-exports:
//! - `blazing_enums`: `labeled_enum!`, label resolution, the parser, flag
//!   algebra and runtime descriptors
//! - `blazing_common`: backing-integer kinds and case-folding helpers
//!
//! and hosts the tracing subscriber setup (`tracing_config`).
//!
//! ```rust
//! use blazing::{EnumExt, labeled_enum, parse};
//!
//! labeled_enum! {
//!     #[flags]
//!     pub enum Perm: u8 {
//!         Read = 1,
//!         Write = 2,
//!         Exec = 4,
//!         All = 7,
//!     }
//! }
//!
//! let perm = parse::<Perm>("Read, Write").unwrap();
//! assert_eq!(perm.add_flag(Perm::Exec), Perm::All);
//! assert_eq!(perm.label(), "Read, Write");
//! ```

pub use blazing_common as common;
pub use blazing_enums as enums;

pub use blazing_common::{EnumRepr, IntKind};
pub use blazing_enums::{
    EnumError, EnumExt, EnumMember, EnumReflect, EnumTypeDescriptor, MemberDecl, NumericFallback,
    ParseOptions, descriptor_of, flags, label_of, labeled_enum, name_of, parse, parse_ignore_case,
    parse_with, try_parse,
};

// Subscriber initialisation driven by BLAZING_LOG / BLAZING_LOG_FORMAT
pub mod tracing_config;
