//! Contact storage consumed by edit sessions.

mod in_memory;
mod traits;

pub use in_memory::InMemoryContactStore;
pub use traits::{ContactStore, SaveAck};
