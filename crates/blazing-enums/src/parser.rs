//! Typed parsing entry points.
//!
//! All of these delegate to `EnumTypeDescriptor::parse` and narrow the
//! widened result back to `E`.

use crate::error::EnumError;
use crate::options::ParseOptions;
use crate::reflect::EnumReflect;
use crate::registry::descriptor_of;
use blazing_common::EnumRepr;

/// Parse `text` case-sensitively.
///
/// Tries declared names (comma-separated lists for flags enums), then
/// labels, then integer literals; fails with `EnumError::InvalidArgument`
/// when nothing matches.
pub fn parse<E: EnumReflect>(text: &str) -> Result<E, EnumError> {
    parse_with(text, ParseOptions::case_sensitive())
}

pub fn parse_ignore_case<E: EnumReflect>(text: &str) -> Result<E, EnumError> {
    parse_with(text, ParseOptions::case_insensitive())
}

pub fn parse_with<E: EnumReflect>(
    text: &str,
    options: impl Into<ParseOptions>,
) -> Result<E, EnumError> {
    descriptor_of::<E>()
        .parse(text, options.into())
        .map(|value| E::from_repr(E::Repr::narrow(value)))
}

/// Like `parse_with`, discarding the error.
pub fn try_parse<E: EnumReflect>(text: &str, ignore_case: bool) -> Option<E> {
    parse_with(text, ignore_case).ok()
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod parser_tests;
