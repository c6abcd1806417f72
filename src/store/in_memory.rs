use crate::error::StoreResult;
use crate::models::Contact;
use crate::store::traits::{ContactStore, SaveAck};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Contact store kept in process memory.
///
/// New contacts get sequential numeric IDs. Cloning shares the same contacts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactStore {
    contacts: Arc<RwLock<HashMap<String, Contact>>>,
    last_id: Arc<AtomicU64>,
}

impl InMemoryContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `contacts`. Contacts without an ID are given one.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let last_id = contacts
            .iter()
            .filter_map(|c| c.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let last_id = AtomicU64::new(last_id);

        let contacts = contacts
            .into_iter()
            .map(|mut contact| {
                if contact.id.is_empty() {
                    contact.id = (last_id.fetch_add(1, Ordering::SeqCst) + 1).to_string();
                }
                (contact.id.clone(), contact)
            })
            .collect();

        Self {
            contacts: Arc::new(RwLock::new(contacts)),
            last_id: Arc::new(last_id),
        }
    }

    /// Load a JSON array of contacts from `path`.
    pub async fn from_json_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let contacts: Vec<Contact> = serde_json::from_str(&raw)?;
        debug!(
            count = contacts.len(),
            path = %path.as_ref().display(),
            "seeded contact store"
        );
        Ok(Self::with_contacts(contacts))
    }

    /// Number of stored contacts.
    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }

    fn next_id(&self) -> String {
        (self.last_id.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn fetch_by_id(&self, id: &str) -> StoreResult<Option<Contact>> {
        Ok(self.contacts.read().await.get(id).cloned())
    }

    async fn save(&self, contact: &Contact) -> StoreResult<SaveAck> {
        let mut stored = contact.clone();
        let created = !stored.is_saved();
        if created {
            stored.id = self.next_id();
        }

        let id = stored.id.clone();
        let mut contacts = self.contacts.write().await;
        let created = contacts.insert(id.clone(), stored).is_none() || created;
        debug!(id = %id, created, "contact stored");

        Ok(SaveAck { id, created })
    }
}
