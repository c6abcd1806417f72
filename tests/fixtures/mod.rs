//! Test fixtures and sample data.
//!
//! Reusable contacts, phones and addresses that pass every field rule unless
//! a test changes them.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_form::{Address, Contact, FormConfig, Phone};
use std::time::Duration;

/// Default address cooldown used by the engine.
pub const COOLDOWN: Duration = Duration::from_millis(3000);

/// Form settings as shipped: banned words `foo`, `bar`, 3s cooldown.
pub fn form_config() -> FormConfig {
    FormConfig::default()
}

/// A phone with a number in the given state.
pub fn sample_phone(number: &str, preferred: bool) -> Phone {
    Phone {
        phone_number: number.to_string(),
        phone_type: "mobile".to_string(),
        preferred,
    }
}

/// A complete address.
pub fn sample_address(city: &str) -> Address {
    Address {
        street_address: "123 Main St".to_string(),
        city: city.to_string(),
        state: "UT".to_string(),
        postal_code: "84101".to_string(),
        address_type: "home".to_string(),
    }
}

/// A fully valid, unsaved contact with one phone and one address.
pub fn sample_contact(first_name: &str, last_name: &str) -> Contact {
    Contact {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1985, 7, 14),
        favorites_ranking: Some(1),
        phones: vec![sample_phone("555-0100", true)],
        addresses: vec![sample_address("Salt Lake City")],
        notes: "Met at the conference".to_string(),
        ..Default::default()
    }
}

/// A fully valid stored contact with three phones and two addresses.
pub fn stored_contact(id: &str) -> Contact {
    Contact {
        id: id.to_string(),
        icon: "person-lightning.png".to_string(),
        personal: true,
        phones: vec![
            sample_phone("555-0100", false),
            sample_phone("555-0101", true),
            sample_phone("", false),
        ],
        addresses: vec![sample_address("Provo"), sample_address("Ogden")],
        ..sample_contact("Sally", "Sparrow")
    }
}

/// Let spawned timer tasks run after the paused clock moves.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

/// Advance the paused clock by `ms` milliseconds and let timers fire.
pub async fn advance_ms(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    settle().await;
}

/// Give a blank form valid first and last names.
pub fn fill_names(form: &contact_form::ContactForm) {
    use contact_form::form::ContactField;

    form.set_value(ContactField::FirstName.into(), "Sally").unwrap();
    form.set_value(ContactField::LastName.into(), "Sparrow").unwrap();
}
