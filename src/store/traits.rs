use crate::error::StoreResult;
use crate::models::Contact;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Acknowledgement of a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveAck {
    /// ID of the stored contact (assigned by the store for new contacts)
    pub id: String,

    /// Whether the save created a new contact
    pub created: bool,
}

/// Storage for contacts.
///
/// The form engine only fetches one contact to edit and saves the result;
/// transport and persistence belong to the implementation.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Retrieve a contact by ID, `None` if absent.
    async fn fetch_by_id(&self, id: &str) -> StoreResult<Option<Contact>>;

    /// Create (empty ID) or replace (existing ID) a contact.
    async fn save(&self, contact: &Contact) -> StoreResult<SaveAck>;
}
