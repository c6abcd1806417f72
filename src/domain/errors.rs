//! Field validation errors.

use std::fmt;

/// A constraint a field value currently fails.
///
/// These are form state, rendered inline next to the field. They are never
/// returned as the `Err` side of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field is required but blank.
    Required,

    /// The value is shorter than the minimum length.
    MinLength { min: usize, actual: usize },

    /// The value contains a banned word.
    BannedWord(String),

    /// The value must be greater than zero.
    NotPositive(i32),

    /// The value is not one of the configured options.
    UnknownOption(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "This field is required"),
            Self::MinLength { min, actual } => {
                write!(f, "Must be at least {} characters (got {})", min, actual)
            }
            Self::BannedWord(word) => write!(f, "Contains a restricted word: {}", word),
            Self::NotPositive(value) => write!(f, "Must be a positive number, got {}", value),
            Self::UnknownOption(value) => write!(f, "Not a valid option: {}", value),
        }
    }
}

impl std::error::Error for ValidationError {}
