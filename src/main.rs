//! Contact Form - command line entry point
//!
//! Loads a contact into an edit session, prints its validation report as JSON
//! on stdout, and saves it to the in-memory store when the form is valid.
//!
//! Usage:
//!   contact-form <contact.json>    edit the contact in the file
//!   contact-form --open <id>       edit a contact from CONTACT_SEED_FILE

use anyhow::{bail, Context, Result};
use contact_form::{
    Config, Contact, ContactForm, ContactStore, EditSessionService, EditSessionServiceImpl,
    InMemoryContactStore,
};
use serde_json::json;
use std::env;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn report(form: &ContactForm) -> serde_json::Value {
    let errors: serde_json::Map<String, serde_json::Value> = form
        .errors()
        .into_iter()
        .map(|(path, errors)| {
            let messages = errors.iter().map(ToString::to_string).collect::<Vec<_>>();
            (path.to_string(), json!(messages))
        })
        .collect();

    json!({
        "valid": form.is_valid(),
        "errors": errors,
        "contact": form.snapshot(),
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first: it reads .env, which may set LOG_LEVEL
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only, stdout carries the report)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(log_level = %config.log_level, "Configuration loaded successfully");

    let store = match &config.seed_file {
        Some(path) => InMemoryContactStore::from_json_file(path)
            .await
            .with_context(|| format!("Failed to seed contacts from {}", path.display()))?,
        None => InMemoryContactStore::new(),
    };
    info!("Contact store ready with {} contacts", store.len().await);

    let store: Arc<dyn ContactStore> = Arc::new(store);
    let service = EditSessionServiceImpl::new(store.clone(), config.form.clone());

    let args: Vec<String> = env::args().skip(1).collect();
    let mut session = match args.as_slice() {
        [flag, id] if flag == "--open" => service.start_existing(id).await?,
        [path] => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path))?;
            let contact: Contact = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse contact in {}", path))?;

            service.start_from_contact(contact)?
        }
        _ => bail!("usage: contact-form <contact.json> | contact-form --open <id>"),
    };

    println!("{}", serde_json::to_string_pretty(&report(session.form()))?);

    if !session.form().is_valid() {
        info!("Form invalid, not saving");
        return Ok(());
    }

    let ack = session.submit().await?;
    println!("{}", serde_json::to_string_pretty(&json!({ "saved": ack }))?);

    info!("Contact form session complete");
    Ok(())
}
