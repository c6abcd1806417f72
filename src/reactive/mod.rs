//! Observer primitives for the validation rules.
//!
//! A distinct-change filter and a cancel-and-reschedule debounce timer. Rules
//! combine them explicitly instead of going through a stream library.

pub mod debounce;
pub mod distinct;

pub use debounce::Debouncer;
pub use distinct::DistinctUntilChanged;
