//! Mock implementations for testing.

pub mod mock_contact_store;

#[allow(unused_imports)]
pub use mock_contact_store::MockContactStore;
