use async_trait::async_trait;
use contact_form::error::{StoreError, StoreResult};
use contact_form::models::Contact;
use contact_form::store::{ContactStore, SaveAck};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Provides an in-memory implementation of ContactStore that can be
/// configured with test data, made to fail saves, and tracks method calls
/// for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactStore {
    contacts: Arc<Mutex<HashMap<String, Contact>>>,
    saved: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(HashMap::new())),
            saved: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_saves: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a contact to the mock store.
    pub fn add_contact(&self, contact: Contact) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.id.clone(), contact);
    }

    /// Make every following save fail with `StoreError::Unavailable(reason)`.
    pub fn fail_saves_with(&self, reason: &str) {
        *self.fail_saves.lock().unwrap() = Some(reason.to_string());
    }

    /// Let saves succeed again.
    pub fn clear_failure(&self) {
        *self.fail_saves.lock().unwrap() = None;
    }

    /// Contacts passed to `save`, in call order.
    pub fn saved(&self) -> Vec<Contact> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MockContactStore {
    async fn fetch_by_id(&self, id: &str) -> StoreResult<Option<Contact>> {
        self.track_call("fetch_by_id");

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.get(id).cloned())
    }

    async fn save(&self, contact: &Contact) -> StoreResult<SaveAck> {
        self.track_call("save");
        self.saved.lock().unwrap().push(contact.clone());

        if let Some(reason) = self.fail_saves.lock().unwrap().clone() {
            return Err(StoreError::Unavailable(reason));
        }

        let mut contacts = self.contacts.lock().unwrap();
        let created = contact.id.is_empty();
        let id = if created {
            format!("mock-{}", contacts.len() + 1)
        } else {
            contact.id.clone()
        };

        let mut stored = contact.clone();
        stored.id = id.clone();
        contacts.insert(id.clone(), stored);

        Ok(SaveAck { id, created })
    }
}
