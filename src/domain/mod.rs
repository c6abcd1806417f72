//! Domain rules shared by the form engine.
//!
//! Field validation errors and the banned-word list applied to notes.

pub mod banned_words;
pub mod errors;

pub use banned_words::BannedWords;
pub use errors::ValidationError;
