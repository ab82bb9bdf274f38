//! Error types for enum parsing.
//!
//! Label resolution and flag algebra are total, so parsing is the only
//! operation that can fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
    /// No parse strategy matched the input text.
    #[error("Requested value '{text}' was not found in enum '{type_name}'.")]
    InvalidArgument {
        /// The text exactly as the caller passed it (untrimmed).
        text: String,
        type_name: &'static str,
    },
}

impl EnumError {
    pub fn invalid_argument(text: impl Into<String>, type_name: &'static str) -> Self {
        EnumError::InvalidArgument {
            text: text.into(),
            type_name,
        }
    }

    /// The input that failed to parse.
    pub fn text(&self) -> &str {
        match self {
            EnumError::InvalidArgument { text, .. } => text,
        }
    }

    /// Name of the enum type the input was parsed against.
    pub fn type_name(&self) -> &'static str {
        match self {
            EnumError::InvalidArgument { type_name, .. } => type_name,
        }
    }
}
