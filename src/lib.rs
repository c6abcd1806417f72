//! Contact Form - the validation engine behind a contact editor.
//!
//! A contact holds a growable list of phones and addresses. Which fields are
//! required changes as the user types: a preferred phone needs a number, and
//! address fields are relaxed while the addresses are being edited and become
//! required again once editing pauses.
//!
//! # Architecture
//!
//! - **models**: Contact, Phone and Address values
//! - **domain**: Field validation errors, banned words, phone format
//! - **reactive**: Distinct-change filter and debounce timer
//! - **form**: Field model, record collections, conditional rules, the form aggregate
//! - **store**: Contact store trait and in-memory implementation
//! - **services**: Edit sessions tying a form to a store
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod models;
pub mod reactive;
pub mod services;
pub mod store;

pub use config::{Config, FormConfig};
pub use error::{ConfigError, FormError, StoreError};
pub use form::{ContactForm, FieldPath, FieldStatus, FieldValue, ValidationReport};
pub use models::{Address, Contact, Phone};
pub use services::{EditSession, EditSessionService, EditSessionServiceImpl, SessionCompletion};
pub use store::{ContactStore, InMemoryContactStore, SaveAck};
