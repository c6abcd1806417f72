//! Form Aggregate: the complete editable state of one contact.

use super::collection::RecordCollection;
use super::path::{ContactField, FieldPath};
use super::record::{NoRule, RecordForm};
use super::rules::{AddressRules, PreferredNumberRule};
use super::schema::{FieldSchema, SchemaContext};
use super::value::FieldValue;
use crate::config::FormConfig;
use crate::domain::ValidationError;
use crate::error::{FormError, FormResult};
use crate::models::{Address, Contact, Phone};
use crate::store::{ContactStore, SaveAck};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Point-in-time view of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStatus {
    pub value: FieldValue,
    pub required: bool,
    pub valid: bool,
    pub errors: Vec<ValidationError>,

    /// Validity recomputations so far
    pub recomputations: u64,
}

/// Invalid fields and their errors, in form order.
pub type ValidationReport = BTreeMap<FieldPath, Vec<ValidationError>>;

#[derive(Debug)]
struct FormState {
    address_cooldown: Duration,
    contact: RecordForm<Contact>,
    phones: RecordCollection<Phone, PreferredNumberRule>,
    addresses: RecordCollection<Address, NoRule>,
    address_rules: Option<AddressRules>,
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn status_of<S: FieldSchema>(record: &RecordForm<S>, field: S::Field) -> Option<FieldStatus> {
    let state = record.field(field)?;
    Some(FieldStatus {
        value: record.value().read(field),
        required: state.is_required(),
        valid: state.is_valid(),
        errors: state.errors().to_vec(),
        recomputations: state.recomputations(),
    })
}

impl FormState {
    fn new(config: &FormConfig) -> Self {
        let ctx = SchemaContext::new(config);
        Self {
            address_cooldown: config.address_cooldown,
            contact: RecordForm::new(&ctx),
            phones: RecordCollection::new(ctx.clone()),
            addresses: RecordCollection::new(ctx),
            address_rules: None,
        }
    }

    fn set_contact_value(&mut self, field: ContactField, value: FieldValue) -> FormResult<()> {
        let actual = value.kind();
        self.contact
            .set_value(field, value)
            .map_err(|expected| FormError::TypeMismatch {
                path: FieldPath::Contact(field).to_string(),
                expected,
                actual,
            })
    }

    /// Emit the address collection value to the address observers, if established.
    fn notify_addresses(&mut self, this: Weak<Mutex<FormState>>) -> FormResult<()> {
        let Some(rules) = self.address_rules.as_mut() else {
            return Ok(());
        };

        let reaction = rules.observe(&self.addresses.snapshot(), move |generation| {
            if let Some(state) = this.upgrade() {
                lock(&state).restore_addresses(generation);
            }
        })?;

        if reaction.relax {
            self.addresses.require_all(false);
            debug!(records = self.addresses.len(), "address fields relaxed");
        }
        Ok(())
    }

    fn restore_addresses(&mut self, generation: u64) {
        let current = self
            .address_rules
            .as_ref()
            .is_some_and(|rules| rules.is_current(generation));
        if !current {
            debug!(generation, "superseded address restore ignored");
            return;
        }

        self.addresses.require_all(true);
        debug!(
            generation,
            records = self.addresses.len(),
            "address fields required after quiet period"
        );
    }

    fn status(&self, path: FieldPath) -> FormResult<FieldStatus> {
        let found = match path {
            FieldPath::Contact(field) => status_of(&self.contact, field),
            FieldPath::Phone { index, field } => {
                let record = self.phones.get(index).ok_or(FormError::NoSuchRecord {
                    collection: Phone::NAME,
                    index,
                    len: self.phones.len(),
                })?;
                status_of(record, field)
            }
            FieldPath::Address { index, field } => {
                let record = self.addresses.get(index).ok_or(FormError::NoSuchRecord {
                    collection: Address::NAME,
                    index,
                    len: self.addresses.len(),
                })?;
                status_of(record, field)
            }
        };
        found.ok_or_else(|| FormError::UnknownField(path.to_string()))
    }

    fn is_valid(&self) -> bool {
        self.contact.is_valid() && self.phones.is_valid() && self.addresses.is_valid()
    }

    fn report(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        for (field, errors) in self.contact.errors() {
            report.insert(FieldPath::Contact(field), errors.to_vec());
        }
        for (index, record) in self.phones.iter().enumerate() {
            for (field, errors) in record.errors() {
                report.insert(FieldPath::phone(index, field), errors.to_vec());
            }
        }
        for (index, record) in self.addresses.iter().enumerate() {
            for (field, errors) in record.errors() {
                report.insert(FieldPath::address(index, field), errors.to_vec());
            }
        }
        report
    }

    fn snapshot(&self) -> Contact {
        let mut contact = self.contact.value().clone();
        contact.phones = self.phones.snapshot();
        contact.addresses = self.addresses.snapshot();
        contact
    }
}

/// The editable form for one contact.
///
/// Owns every field and collection of the session. All mutation goes through
/// its methods, which apply the validation rules synchronously. The only
/// deferred work is the address restore timer, which never outlives the form.
///
/// Address observers must be established with [`ContactForm::observe_addresses`]
/// (or by [`ContactForm::hydrate`]) inside a Tokio runtime.
#[derive(Debug)]
pub struct ContactForm {
    state: Arc<Mutex<FormState>>,
}

impl ContactForm {
    /// A blank form with one phone and one address. Address observers are not yet established.
    pub fn new(config: &FormConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::new(config))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        lock(&self.state)
    }

    /// Start observing the address collection. Returns false if already observing.
    pub fn observe_addresses(&self) -> bool {
        let mut state = self.lock();
        if state.address_rules.is_some() {
            return false;
        }
        state.address_rules = Some(AddressRules::new(state.address_cooldown));
        debug!(
            cooldown_ms = state.address_cooldown.as_millis() as u64,
            "address observers established"
        );
        true
    }

    pub fn is_observing_addresses(&self) -> bool {
        self.lock().address_rules.is_some()
    }

    /// Load an existing contact.
    ///
    /// Collections are grown to the contact's record counts, then every field
    /// is assigned in order with phone rules active. Address observers are
    /// established afterwards, so loading never relaxes or restores address
    /// requirements.
    ///
    /// # Errors
    ///
    /// `FormError::ShapeMismatch` if the contact has no phones or addresses, or
    /// fewer than the form already holds. The form is unchanged in that case.
    pub fn hydrate(&self, contact: Contact) -> FormResult<()> {
        let mut state = self.lock();
        state.phones.check_growable(contact.phones.len())?;
        state.addresses.check_growable(contact.addresses.len())?;

        state.phones.grow_to(contact.phones.len())?;
        state.addresses.grow_to(contact.addresses.len())?;

        for &field in Contact::FIELDS {
            state.set_contact_value(field, contact.read(field))?;
        }
        state.phones.assign(contact.phones)?;
        state.addresses.assign(contact.addresses)?;

        if state.address_rules.is_none() {
            state.address_rules = Some(AddressRules::new(state.address_cooldown));
        }

        info!(
            id = %contact.id,
            phones = state.phones.len(),
            addresses = state.addresses.len(),
            "contact form hydrated"
        );
        Ok(())
    }

    /// Write one field and run the rules that observe it.
    ///
    /// # Errors
    ///
    /// `NoSuchRecord` or `TypeMismatch` for a bad path or value;
    /// `NoRuntime` if an address edit cannot arm its restore timer.
    pub fn set_value(&self, path: FieldPath, value: impl Into<FieldValue>) -> FormResult<()> {
        let value = value.into();
        let this = Arc::downgrade(&self.state);
        let mut state = self.lock();

        match path {
            FieldPath::Contact(field) => state.set_contact_value(field, value),
            FieldPath::Phone { index, field } => state.phones.set_value(index, field, value),
            FieldPath::Address { index, field } => {
                state.addresses.set_value(index, field, value)?;
                state.notify_addresses(this)
            }
        }
    }

    /// Append a blank phone. Returns its index.
    pub fn add_phone(&self) -> usize {
        self.lock().phones.append()
    }

    /// Append a blank address, which counts as an address edit. Returns its index.
    pub fn add_address(&self) -> FormResult<usize> {
        let this = Arc::downgrade(&self.state);
        let mut state = self.lock();
        let index = state.addresses.append();
        state.notify_addresses(this)?;
        Ok(index)
    }

    pub fn phone_count(&self) -> usize {
        self.lock().phones.len()
    }

    pub fn address_count(&self) -> usize {
        self.lock().addresses.len()
    }

    /// Current value, required flag and validity of one field.
    pub fn field_status(&self, path: FieldPath) -> FormResult<FieldStatus> {
        self.lock().status(path)
    }

    /// Whether an address restore is waiting for the quiet period to end.
    pub fn address_restore_pending(&self) -> bool {
        self.lock()
            .address_rules
            .as_ref()
            .is_some_and(AddressRules::restore_pending)
    }

    /// True iff every field and every record is valid.
    pub fn is_valid(&self) -> bool {
        self.lock().is_valid()
    }

    /// Failing fields with their errors.
    pub fn errors(&self) -> ValidationReport {
        self.lock().report()
    }

    /// Paths of failing fields, e.g. `addresses[0].city`.
    pub fn invalid_fields(&self) -> Vec<String> {
        self.lock().report().keys().map(ToString::to_string).collect()
    }

    /// The full contact value, regardless of validity.
    pub fn snapshot(&self) -> Contact {
        self.lock().snapshot()
    }

    /// Save the snapshot if the form is valid.
    ///
    /// # Errors
    ///
    /// `FormError::FormInvalid` without calling the store when any field is
    /// invalid; `FormError::Store` when the save fails.
    pub async fn submit(&self, store: &dyn ContactStore) -> FormResult<SaveAck> {
        let contact = {
            let state = self.lock();
            if !state.is_valid() {
                let invalid: Vec<String> = state.report().keys().map(ToString::to_string).collect();
                warn!(?invalid, "submit rejected, form invalid");
                return Err(FormError::FormInvalid { invalid });
            }
            state.snapshot()
        };

        let ack = store.save(&contact).await?;
        info!(id = %ack.id, created = ack.created, "contact saved");
        Ok(ack)
    }
}
