//! One record's value plus its validator side table.

use super::field::FieldState;
use super::schema::{FieldSchema, SchemaContext};
use super::value::{FieldValue, ValueKind};
use crate::domain::ValidationError;
use std::collections::BTreeMap;

/// A record value and the validator state of each of its fields.
#[derive(Debug, Clone)]
pub struct RecordForm<S: FieldSchema> {
    value: S,
    fields: BTreeMap<S::Field, FieldState>,
}

impl<S: FieldSchema> RecordForm<S> {
    /// A record at schema defaults with initial validity computed.
    pub fn new(ctx: &SchemaContext) -> Self {
        let value = S::default();
        let fields = S::FIELDS
            .iter()
            .map(|&field| {
                let mut state = S::initial_state(field, ctx);
                state.update_validity(&value.read(field));
                (field, state)
            })
            .collect();
        Self { value, fields }
    }

    pub fn value(&self) -> &S {
        &self.value
    }

    pub fn field(&self, field: S::Field) -> Option<&FieldState> {
        self.fields.get(&field)
    }

    fn state_mut(&mut self, field: S::Field) -> &mut FieldState {
        self.fields.entry(field).or_default()
    }

    /// Write a value and recompute that field's validity.
    pub fn set_value(&mut self, field: S::Field, value: FieldValue) -> Result<(), ValueKind> {
        self.value.write(field, value)?;
        let current = self.value.read(field);
        self.state_mut(field).update_validity(&current);
        Ok(())
    }

    /// Change the required flag without recomputing validity.
    pub fn set_required(&mut self, field: S::Field, required: bool) {
        self.state_mut(field).set_required(required);
    }

    pub fn update_validity(&mut self, field: S::Field) {
        let current = self.value.read(field);
        self.state_mut(field).update_validity(&current);
    }

    /// Set every field's required flag and recompute each.
    pub fn require_all(&mut self, required: bool) {
        for &field in S::FIELDS {
            self.set_required(field, required);
            self.update_validity(field);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.fields.values().all(FieldState::is_valid)
    }

    /// Failing fields and their errors, in field order.
    pub fn errors(&self) -> impl Iterator<Item = (S::Field, &[ValidationError])> + '_ {
        self.fields
            .iter()
            .filter(|(_, state)| !state.is_valid())
            .map(|(field, state)| (*field, state.errors()))
    }
}

/// A reaction bound to one record at creation time.
///
/// Called after every successful field write on that record.
pub trait RecordRule<S: FieldSchema>: Send + 'static {
    fn bind() -> Self;

    fn on_change(&mut self, changed: S::Field, record: &mut RecordForm<S>);
}

/// No per-record reaction.
#[derive(Debug, Default)]
pub struct NoRule;

impl<S: FieldSchema> RecordRule<S> for NoRule {
    fn bind() -> Self {
        NoRule
    }

    fn on_change(&mut self, _changed: S::Field, _record: &mut RecordForm<S>) {}
}
