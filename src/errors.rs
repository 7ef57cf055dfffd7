//! General error types for the matchers
//!
//! Wrong-type input and invalid JSON are *not* errors: they are reported as failing
//! [Verdict](crate::verdict::Verdict)s. The types here cover mistakes made by the author of an
//! assertion, such as a malformed JSONPath selector, which are returned as `Err` and left for the
//! caller to surface.

use std::fmt::{Display, Formatter};

/// Global result type used throughout the matcher stages
pub type MatcherResult<T> = Result<T, Error>;

/// Enumeration of the various different stages that can produce an error
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Selecting a sub-value of the parsed document with a JSONPath selector
    Narrowing,
    /// Structural comparison of the parsed document against an expected value
    Comparison,
    /// Looking up or invoking a matcher by name
    Registry,
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Narrowing => write!(f, "narrowing"),
            Stage::Comparison => write!(f, "comparison"),
            Stage::Registry => write!(f, "registry"),
        }
    }
}

/// A global enumeration of error details
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Details {
    #[error("`{selector}` is not a valid JSONPath selector: {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("{role} value must be a non-null object or array, found {found}")]
    NonObjectOperand { role: &'static str, found: String },
    #[error("no matcher is registered under the name `{0}`")]
    UnknownMatcher(String),
    #[error("matcher `{0}` requires an expected value")]
    MissingExpected(String),
}

/// The general error structure
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The originating stage for the error
    pub stage: Stage,
    /// The details of the error
    pub details: Details,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error: {}", self.stage, self.details)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.details)
    }
}

#[macro_export]
macro_rules! narrowing_error {
    ($details: expr) => {
        Err($crate::errors::Error {
            stage: $crate::errors::Stage::Narrowing,
            details: $details,
        })
    };
}

#[macro_export]
macro_rules! comparison_error {
    ($details: expr) => {
        Err($crate::errors::Error {
            stage: $crate::errors::Stage::Comparison,
            details: $details,
        })
    };
}

#[macro_export]
macro_rules! registry_error {
    ($details: expr) => {
        Err($crate::errors::Error {
            stage: $crate::errors::Stage::Registry,
            details: $details,
        })
    };
}
