//! Parse configuration.
//!
//! `ParseOptions` is plain data with serde support so applications can keep
//! it in their own configuration files:
//!
//! ```json
//! { "ignoreCase": true, "numericFallback": "declaredOnlyForOrdinal" }
//! ```
//!
//! Missing fields take their defaults (case-sensitive, any integer accepted).

use serde::{Deserialize, Serialize};

/// How the numeric strategy treats integers that name no declared member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumericFallback {
    /// Accept any integer in range for the backing type (unchecked cast).
    #[default]
    Any,
    /// Ordinal enums only accept integers equal to a declared member's
    /// value. Flags enums still accept any integer, since undeclared bit
    /// combinations are legitimate values there.
    DeclaredOnlyForOrdinal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Compare names and labels case-insensitively.
    pub ignore_case: bool,
    pub numeric_fallback: NumericFallback,
}

impl ParseOptions {
    /// Case-sensitive matching with the permissive numeric fallback.
    pub const fn case_sensitive() -> Self {
        ParseOptions {
            ignore_case: false,
            numeric_fallback: NumericFallback::Any,
        }
    }

    pub const fn case_insensitive() -> Self {
        ParseOptions {
            ignore_case: true,
            numeric_fallback: NumericFallback::Any,
        }
    }

    pub const fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub const fn with_numeric_fallback(mut self, numeric_fallback: NumericFallback) -> Self {
        self.numeric_fallback = numeric_fallback;
        self
    }

    /// Load options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<bool> for ParseOptions {
    /// `true` means ignore case.
    fn from(ignore_case: bool) -> Self {
        ParseOptions::case_sensitive().with_ignore_case(ignore_case)
    }
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod options_tests;
