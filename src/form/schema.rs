//! Field schemas: how each model exposes its leaf fields to the form.

use super::field::{Constraint, FieldState};
use super::path::{AddressField, ContactField, PhoneField};
use super::value::{FieldValue, ValueKind};
use crate::config::FormConfig;
use crate::domain::BannedWords;
use crate::models::{Address, Contact, Phone};
use std::fmt;
use std::sync::Arc;

/// Shared validation inputs derived once per form from [`FormConfig`].
#[derive(Debug, Clone)]
pub struct SchemaContext {
    pub banned_words: Arc<BannedWords>,
    pub phone_types: Option<Arc<[String]>>,
    pub address_types: Option<Arc<[String]>>,
    pub name_min_length: usize,
}

impl SchemaContext {
    pub fn new(config: &FormConfig) -> Self {
        let options = |values: &[String]| {
            config
                .enforce_option_sets
                .then(|| Arc::<[String]>::from(values.to_vec()))
        };

        Self {
            banned_words: Arc::new(BannedWords::new(&config.banned_words)),
            phone_types: options(&config.phone_types),
            address_types: options(&config.address_types),
            name_min_length: config.name_min_length,
        }
    }
}

/// A value type whose leaf fields the form can read, write and validate.
pub trait FieldSchema: Clone + Default + PartialEq + fmt::Debug + Send + 'static {
    type Field: Copy + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Collection name used in errors and paths.
    const NAME: &'static str;

    /// Every field, in assignment order.
    const FIELDS: &'static [Self::Field];

    fn read(&self, field: Self::Field) -> FieldValue;

    /// Write `value`, or return the kind the field expects.
    fn write(&mut self, field: Self::Field, value: FieldValue) -> Result<(), ValueKind>;

    /// Validator state a freshly created field starts with.
    fn initial_state(field: Self::Field, ctx: &SchemaContext) -> FieldState;
}

fn text(slot: &mut String, value: FieldValue) -> Result<(), ValueKind> {
    match value {
        FieldValue::Text(s) => {
            *slot = s;
            Ok(())
        }
        _ => Err(ValueKind::Text),
    }
}

fn flag(slot: &mut bool, value: FieldValue) -> Result<(), ValueKind> {
    match value {
        FieldValue::Flag(b) => {
            *slot = b;
            Ok(())
        }
        _ => Err(ValueKind::Flag),
    }
}

fn with_options(state: FieldState, options: &Option<Arc<[String]>>) -> FieldState {
    match options {
        Some(options) => state.with(Constraint::OneOf(options.clone())),
        None => state,
    }
}

impl FieldSchema for Contact {
    type Field = ContactField;

    const NAME: &'static str = "contact";

    const FIELDS: &'static [ContactField] = &[
        ContactField::Id,
        ContactField::Icon,
        ContactField::Personal,
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::DateOfBirth,
        ContactField::FavoritesRanking,
        ContactField::Notes,
    ];

    fn read(&self, field: ContactField) -> FieldValue {
        match field {
            ContactField::Id => self.id.clone().into(),
            ContactField::Icon => self.icon.clone().into(),
            ContactField::Personal => self.personal.into(),
            ContactField::FirstName => self.first_name.clone().into(),
            ContactField::LastName => self.last_name.clone().into(),
            ContactField::DateOfBirth => self.date_of_birth.into(),
            ContactField::FavoritesRanking => self.favorites_ranking.into(),
            ContactField::Notes => self.notes.clone().into(),
        }
    }

    fn write(&mut self, field: ContactField, value: FieldValue) -> Result<(), ValueKind> {
        match field {
            ContactField::Id => text(&mut self.id, value),
            ContactField::Icon => text(&mut self.icon, value),
            ContactField::Personal => flag(&mut self.personal, value),
            ContactField::FirstName => text(&mut self.first_name, value),
            ContactField::LastName => text(&mut self.last_name, value),
            ContactField::DateOfBirth => match value {
                FieldValue::Date(d) => {
                    self.date_of_birth = d;
                    Ok(())
                }
                _ => Err(ValueKind::Date),
            },
            ContactField::FavoritesRanking => match value {
                FieldValue::Number(n) => {
                    self.favorites_ranking = n;
                    Ok(())
                }
                _ => Err(ValueKind::Number),
            },
            ContactField::Notes => text(&mut self.notes, value),
        }
    }

    fn initial_state(field: ContactField, ctx: &SchemaContext) -> FieldState {
        match field {
            ContactField::FirstName | ContactField::LastName => {
                FieldState::required().with(Constraint::MinLength(ctx.name_min_length))
            }
            ContactField::FavoritesRanking => FieldState::optional().with(Constraint::Positive),
            ContactField::Notes => {
                FieldState::optional().with(Constraint::NoBannedWords(ctx.banned_words.clone()))
            }
            ContactField::Id
            | ContactField::Icon
            | ContactField::Personal
            | ContactField::DateOfBirth => FieldState::optional(),
        }
    }
}

impl FieldSchema for Phone {
    type Field = PhoneField;

    const NAME: &'static str = "phones";

    // `preferred` last so the number's required flag follows the final value
    const FIELDS: &'static [PhoneField] = &[PhoneField::Number, PhoneField::Type, PhoneField::Preferred];

    fn read(&self, field: PhoneField) -> FieldValue {
        match field {
            PhoneField::Number => self.phone_number.clone().into(),
            PhoneField::Type => self.phone_type.clone().into(),
            PhoneField::Preferred => self.preferred.into(),
        }
    }

    fn write(&mut self, field: PhoneField, value: FieldValue) -> Result<(), ValueKind> {
        match field {
            PhoneField::Number => text(&mut self.phone_number, value),
            PhoneField::Type => text(&mut self.phone_type, value),
            PhoneField::Preferred => flag(&mut self.preferred, value),
        }
    }

    fn initial_state(field: PhoneField, ctx: &SchemaContext) -> FieldState {
        match field {
            PhoneField::Number => FieldState::optional(),
            PhoneField::Type => with_options(FieldState::optional(), &ctx.phone_types),
            PhoneField::Preferred => FieldState::optional(),
        }
    }
}

impl FieldSchema for Address {
    type Field = AddressField;

    const NAME: &'static str = "addresses";

    const FIELDS: &'static [AddressField] = &[
        AddressField::Street,
        AddressField::City,
        AddressField::State,
        AddressField::PostalCode,
        AddressField::Type,
    ];

    fn read(&self, field: AddressField) -> FieldValue {
        match field {
            AddressField::Street => self.street_address.clone().into(),
            AddressField::City => self.city.clone().into(),
            AddressField::State => self.state.clone().into(),
            AddressField::PostalCode => self.postal_code.clone().into(),
            AddressField::Type => self.address_type.clone().into(),
        }
    }

    fn write(&mut self, field: AddressField, value: FieldValue) -> Result<(), ValueKind> {
        match field {
            AddressField::Street => text(&mut self.street_address, value),
            AddressField::City => text(&mut self.city, value),
            AddressField::State => text(&mut self.state, value),
            AddressField::PostalCode => text(&mut self.postal_code, value),
            AddressField::Type => text(&mut self.address_type, value),
        }
    }

    fn initial_state(field: AddressField, ctx: &SchemaContext) -> FieldState {
        match field {
            AddressField::Type => with_options(FieldState::required(), &ctx.address_types),
            _ => FieldState::required(),
        }
    }
}
