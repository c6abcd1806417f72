//! Error types for the contact form engine.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures are not errors in this sense: they live on the
//! form as state (see [`crate::domain::ValidationError`]).

use crate::form::ValueKind;
use thiserror::Error;

/// Errors raised by a contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No contact exists under the requested ID
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The store could not be reached
    #[error("Contact store unavailable: {0}")]
    Unavailable(String),

    /// Failed to (de)serialize contact data
    #[error("JSON parse error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to read seed data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the form aggregate and edit session.
#[derive(Error, Debug)]
pub enum FormError {
    /// Hydration data does not fit a collection's cardinality
    #[error("Shape mismatch for {collection}: expected {expected} records, found {actual}")]
    ShapeMismatch {
        collection: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Submit attempted while one or more fields are invalid
    #[error("Form is invalid: {}", invalid.join(", "))]
    FormInvalid { invalid: Vec<String> },

    /// Fetch or save failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A record index outside the collection
    #[error("No {collection} record at index {index} (collection has {len})")]
    NoSuchRecord {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    /// A value of the wrong type written to a field
    #[error("Field {path} holds {expected} values, got {actual}")]
    TypeMismatch {
        path: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// A path with no validator state in the form
    #[error("Field {0} is not part of the form")]
    UnknownField(String),

    /// The debounce timer was armed outside a Tokio runtime
    #[error("Debounce timer requires a running Tokio runtime")]
    NoRuntime,

    /// Submit called on a session that already completed
    #[error("Edit session already completed")]
    SessionClosed,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with FormError
pub type FormResult<T> = Result<T, FormError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
