//! The contact form engine.
//!
//! - **value** / **path**: leaf values and how fields are addressed
//! - **field**: per-field validator state (the Field Model)
//! - **schema**: how contacts, phones and addresses expose their fields
//! - **record** / **collection**: one record's form, and grow-only lists of them
//! - **rules**: the conditional requirement rules for phones and addresses
//! - **aggregate**: [`ContactForm`], the whole form for one edit session

pub mod aggregate;
pub mod collection;
pub mod field;
pub mod path;
pub mod record;
pub mod rules;
pub mod schema;
pub mod value;

pub use aggregate::{ContactForm, FieldStatus, ValidationReport};
pub use collection::RecordCollection;
pub use field::{Constraint, FieldState};
pub use path::{AddressField, ContactField, FieldPath, PhoneField};
pub use record::{NoRule, RecordForm, RecordRule};
pub use rules::{AddressReaction, AddressRules, PreferredNumberRule};
pub use schema::{FieldSchema, SchemaContext};
pub use value::{FieldValue, ValueKind};
