//! Edit session service.
//!
//! One session edits one contact: it owns the form, talks to the store, and
//! fires its completion signal once the contact is saved.

use crate::config::FormConfig;
use crate::error::{FormError, FormResult, StoreError};
use crate::form::ContactForm;
use crate::models::Contact;
use crate::store::{ContactStore, SaveAck};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::info;

/// Resolves with the save acknowledgement when the session completes.
///
/// Resolves with an error instead if the session is dropped unsaved.
pub type SessionCompletion = oneshot::Receiver<SaveAck>;

/// An in-progress edit of one contact.
pub struct EditSession {
    form: ContactForm,
    store: Arc<dyn ContactStore>,
    completion_tx: Option<oneshot::Sender<SaveAck>>,
    completion_rx: Option<SessionCompletion>,
}

impl EditSession {
    fn new(form: ContactForm, store: Arc<dyn ContactStore>) -> Self {
        let (tx, rx) = oneshot::channel();
        Self {
            form,
            store,
            completion_tx: Some(tx),
            completion_rx: Some(rx),
        }
    }

    /// The form being edited.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Take the completion signal. Returns `None` after the first call.
    pub fn completion(&mut self) -> Option<SessionCompletion> {
        self.completion_rx.take()
    }

    /// Whether the contact has been saved.
    pub fn is_completed(&self) -> bool {
        self.completion_tx.is_none()
    }

    /// Submit the form and, on success, signal completion.
    ///
    /// # Errors
    ///
    /// `FormError::SessionClosed` after a successful submit; otherwise as
    /// [`ContactForm::submit`]. A failed submit leaves the session open.
    pub async fn submit(&mut self) -> FormResult<SaveAck> {
        if self.completion_tx.is_none() {
            return Err(FormError::SessionClosed);
        }

        let ack = self.form.submit(self.store.as_ref()).await?;

        if let Some(tx) = self.completion_tx.take() {
            // Nobody listening is fine: the caller may not route on completion
            let _ = tx.send(ack.clone());
        }
        info!(id = %ack.id, "edit session completed");
        Ok(ack)
    }
}

/// Starts edit sessions.
#[async_trait]
pub trait EditSessionService: Send + Sync {
    /// Start editing a new contact. Address observers are active immediately.
    fn start_new(&self) -> EditSession;

    /// Start editing `contact` as loaded. Address observers are established
    /// once the contact has been hydrated.
    fn start_from_contact(&self, contact: Contact) -> FormResult<EditSession>;

    /// Start editing the contact stored under `contact_id`.
    ///
    /// An empty ID starts a new contact instead.
    async fn start_existing(&self, contact_id: &str) -> FormResult<EditSession>;
}

/// Default implementation of EditSessionService.
pub struct EditSessionServiceImpl {
    store: Arc<dyn ContactStore>,
    config: FormConfig,
}

impl EditSessionServiceImpl {
    /// Create a new edit session service.
    pub fn new(store: Arc<dyn ContactStore>, config: FormConfig) -> Self {
        Self { store, config }
    }
}

#[async_trait]
impl EditSessionService for EditSessionServiceImpl {
    fn start_new(&self) -> EditSession {
        let form = ContactForm::new(&self.config);
        form.observe_addresses();
        info!("edit session started for new contact");
        EditSession::new(form, self.store.clone())
    }

    fn start_from_contact(&self, contact: Contact) -> FormResult<EditSession> {
        let id = contact.id.clone();
        let form = ContactForm::new(&self.config);
        form.hydrate(contact)?;
        info!(id = %id, "edit session started for loaded contact");
        Ok(EditSession::new(form, self.store.clone()))
    }

    async fn start_existing(&self, contact_id: &str) -> FormResult<EditSession> {
        if contact_id.trim().is_empty() {
            return Ok(self.start_new());
        }

        let contact = self
            .store
            .fetch_by_id(contact_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(contact_id.to_string()))?;

        self.start_from_contact(contact)
    }
}
