//! Contact model: the value a form session edits and the store persists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A phone number entry for a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Phone {
    /// The phone number as typed
    pub phone_number: String,

    /// One of the configured phone types (e.g. "mobile")
    pub phone_type: String,

    /// Whether this is the preferred number; a preferred phone needs a number
    pub preferred: bool,
}

/// A postal address entry for a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,

    /// One of the configured address types (e.g. "home")
    pub address_type: String,
}

/// A contact record.
///
/// An empty `id` marks a contact that has never been saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier, empty until the store assigns one
    pub id: String,

    /// Icon shown in the contact list
    pub icon: String,

    /// Personal (as opposed to business) contact
    pub personal: bool,

    pub first_name: String,

    pub last_name: String,

    /// Birth date, serialized as `YYYY-MM-DD`
    pub date_of_birth: Option<NaiveDate>,

    /// Position in the favorites list, lower ranks first
    pub favorites_ranking: Option<i32>,

    pub phones: Vec<Phone>,

    pub addresses: Vec<Address>,

    pub notes: String,
}

impl Contact {
    /// Create a contact with a name and one blank phone and address.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phones: vec![Phone::default()],
            addresses: vec![Address::default()],
            ..Default::default()
        }
    }

    /// Whether the contact has been persisted.
    pub fn is_saved(&self) -> bool {
        !self.id.is_empty()
    }
}
