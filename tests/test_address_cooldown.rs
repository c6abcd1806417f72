//! Address fields: relaxed on every distinct edit, required again once the
//! collection has been quiet for the cooldown.

mod fixtures;

use contact_form::domain::ValidationError;
use contact_form::form::{AddressField, FieldPath};
use contact_form::{ContactForm, FormConfig, FormError};
use fixtures::{advance_ms, fill_names, form_config, stored_contact};
use std::time::Duration;

fn city(index: usize) -> FieldPath {
    FieldPath::address(index, AddressField::City)
}

fn street(index: usize) -> FieldPath {
    FieldPath::address(index, AddressField::Street)
}

/// A new form whose only invalid fields are the blank address fields.
fn observed_form() -> ContactForm {
    let form = ContactForm::new(&form_config());
    fill_names(&form);
    assert!(form.observe_addresses());
    form
}

#[tokio::test(start_paused = true)]
async fn test_blank_address_required_before_any_edit() {
    let form = observed_form();

    assert!(!form.is_valid());
    assert!(form.field_status(street(0)).unwrap().required);
    assert!(!form.address_restore_pending());
}

#[tokio::test(start_paused = true)]
async fn test_edit_relaxes_all_address_fields_immediately() {
    let form = observed_form();
    form.set_value(city(0), "Provo").unwrap();

    for field in [
        AddressField::Street,
        AddressField::State,
        AddressField::PostalCode,
        AddressField::Type,
    ] {
        let status = form.field_status(FieldPath::address(0, field)).unwrap();
        assert!(!status.required, "{} should be optional", field);
        assert!(status.valid);
    }
    assert!(form.is_valid());
    assert!(form.address_restore_pending());
}

#[tokio::test(start_paused = true)]
async fn test_fields_required_again_after_cooldown() {
    let form = observed_form();
    form.set_value(city(0), "Provo").unwrap();

    advance_ms(2999).await;
    assert!(form.is_valid(), "still relaxed before the cooldown ends");
    assert!(form.address_restore_pending());

    advance_ms(1).await;
    assert!(!form.is_valid());
    assert!(!form.address_restore_pending());

    let status = form.field_status(street(0)).unwrap();
    assert!(status.required);
    assert_eq!(status.errors, vec![ValidationError::Required]);
    assert!(form.field_status(city(0)).unwrap().valid);
}

#[tokio::test(start_paused = true)]
async fn test_new_edit_restarts_cooldown() {
    let form = observed_form();
    form.set_value(city(0), "Provo").unwrap();

    advance_ms(1500).await;
    form.set_value(street(0), "1 Center St").unwrap();

    advance_ms(1500).await;
    assert!(form.is_valid(), "first timer must not fire at 3000ms");

    advance_ms(1499).await;
    assert!(form.is_valid());

    advance_ms(1).await;
    assert!(!form.is_valid(), "restored at 4500ms");
    assert!(form.field_status(street(0)).unwrap().required);
}

#[tokio::test(start_paused = true)]
async fn test_same_value_does_not_restart_cooldown() {
    let form = observed_form();
    form.set_value(city(0), "Provo").unwrap();

    advance_ms(1500).await;
    form.set_value(city(0), "Provo").unwrap();

    advance_ms(1500).await;
    assert!(!form.is_valid(), "unchanged value keeps the original deadline");
}

#[tokio::test(start_paused = true)]
async fn test_edit_after_restore_relaxes_again() {
    let form = observed_form();
    form.set_value(city(0), "Provo").unwrap();
    advance_ms(3000).await;
    assert!(!form.is_valid());

    form.set_value(city(0), "Ogden").unwrap();
    assert!(form.is_valid());
    assert!(form.address_restore_pending());
}

#[tokio::test(start_paused = true)]
async fn test_adding_address_counts_as_edit() {
    let form = observed_form();
    for field in [
        AddressField::Street,
        AddressField::City,
        AddressField::State,
        AddressField::PostalCode,
    ] {
        form.set_value(FieldPath::address(0, field), "x1").unwrap();
    }
    form.set_value(FieldPath::address(0, AddressField::Type), "home").unwrap();
    advance_ms(3000).await;
    assert!(form.is_valid());

    let index = form.add_address().unwrap();
    assert_eq!(index, 1);
    assert_eq!(form.address_count(), 2);
    assert!(form.is_valid(), "new blank address is relaxed");

    advance_ms(3000).await;
    assert!(!form.is_valid());
    assert!(form
        .invalid_fields()
        .contains(&"addresses[1].city".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_unobserved_form_keeps_addresses_required() {
    let form = ContactForm::new(&form_config());
    fill_names(&form);
    assert!(!form.is_observing_addresses());

    form.set_value(city(0), "Provo").unwrap();

    assert!(form.field_status(street(0)).unwrap().required);
    assert!(!form.address_restore_pending());
    assert!(!form.is_valid());
}

#[tokio::test(start_paused = true)]
async fn test_hydration_does_not_relax_or_restore() {
    let form = ContactForm::new(&form_config());
    let mut contact = stored_contact("7");
    contact.addresses[1].city = String::new();
    form.hydrate(contact).unwrap();

    assert!(form.is_observing_addresses());
    assert!(!form.address_restore_pending());
    assert_eq!(form.invalid_fields(), vec!["addresses[1].city".to_string()]);

    advance_ms(5000).await;
    assert_eq!(form.invalid_fields(), vec!["addresses[1].city".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_custom_cooldown() {
    let config = FormConfig::default().with_address_cooldown(Duration::from_millis(250));
    let form = ContactForm::new(&config);
    fill_names(&form);
    form.observe_addresses();

    form.set_value(city(0), "Provo").unwrap();
    advance_ms(249).await;
    assert!(form.is_valid());
    advance_ms(1).await;
    assert!(!form.is_valid());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_form_cancels_restore() {
    let form = observed_form();
    form.set_value(city(0), "Provo").unwrap();
    assert!(form.address_restore_pending());

    let survivor = observed_form();
    survivor.set_value(city(0), "Ogden").unwrap();
    drop(form);

    advance_ms(3000).await;
    assert!(!survivor.address_restore_pending());
    assert!(!survivor.is_valid(), "the surviving form still restores");
}

#[test]
fn test_edit_outside_runtime_can_be_repeated_inside_one() {
    let form = observed_form();
    let result = form.set_value(city(0), "Provo");

    assert!(matches!(result, Err(FormError::NoRuntime)));
    assert_eq!(form.snapshot().addresses[0].city, "Provo");
    assert!(!form.address_restore_pending());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap();
    runtime.block_on(async {
        form.set_value(city(0), "Provo").unwrap();
        assert!(!form.field_status(street(0)).unwrap().required);
        assert!(form.address_restore_pending());
        assert!(form.is_valid());

        advance_ms(3000).await;
        assert!(form.field_status(street(0)).unwrap().required);
        assert!(!form.is_valid());
    });
}
