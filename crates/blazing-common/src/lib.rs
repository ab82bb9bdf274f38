//! Common primitives for the blazing crates.
//!
//! This crate provides the small foundations the enum subsystem builds on:
//! - Backing-integer descriptions (`IntKind`) and the width-generic
//!   widen/narrow pair (`EnumRepr`)
//! - Case folding and whitespace helpers used when matching names and labels

// Backing integer widths and the widen/narrow conversion pair
pub mod repr;
pub use repr::{EnumRepr, IntKind};

// Case-insensitive comparison helpers
pub mod text;
pub use text::{eq_with_case, fold_case};
