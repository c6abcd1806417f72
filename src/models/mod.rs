//! Data models for contacts and their repeated records.

pub mod contact;

pub use contact::{Address, Contact, Phone};
