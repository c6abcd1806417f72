//! Configuration management for the contact form engine.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is loaded first when present.

use crate::domain::BannedWords;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default quiet period before address fields become required again.
pub const DEFAULT_ADDRESS_COOLDOWN_MS: u64 = 3000;

/// Validation settings for one form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    /// Words `notes` may not contain (whole word, case-insensitive)
    pub banned_words: Vec<String>,

    /// Allowed phone types
    pub phone_types: Vec<String>,

    /// Allowed address types
    pub address_types: Vec<String>,

    /// Minimum length of first and last name (default: 3)
    pub name_min_length: usize,

    /// Quiet period after the last address edit before address fields are required again
    pub address_cooldown: Duration,

    /// Reject type values outside `phone_types` / `address_types` (default: true)
    pub enforce_option_sets: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            banned_words: vec!["foo".to_string(), "bar".to_string()],
            phone_types: vec!["mobile".to_string(), "work".to_string(), "other".to_string()],
            address_types: vec!["home".to_string(), "work".to_string(), "other".to_string()],
            name_min_length: 3,
            address_cooldown: Duration::from_millis(DEFAULT_ADDRESS_COOLDOWN_MS),
            enforce_option_sets: true,
        }
    }
}

impl FormConfig {
    /// Same settings with a different address cooldown.
    pub fn with_address_cooldown(mut self, cooldown: Duration) -> Self {
        self.address_cooldown = cooldown;
        self
    }

    /// Same settings with a different banned-word list.
    pub fn with_banned_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.banned_words = words.into_iter().map(Into::into).collect();
        self
    }
}

/// Configuration for the contact form binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Form validation settings
    pub form: FormConfig,

    /// JSON file with an array of contacts to seed the in-memory store
    pub seed_file: Option<PathBuf>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CONTACT_BANNED_WORDS`: comma list of banned words (default: "foo,bar")
    /// - `CONTACT_PHONE_TYPES`: comma list (default: "mobile,work,other")
    /// - `CONTACT_ADDRESS_TYPES`: comma list (default: "home,work,other")
    /// - `CONTACT_NAME_MIN_LENGTH`: minimum name length (default: 3)
    /// - `ADDRESS_COOLDOWN_MS`: address cooldown in milliseconds (default: 3000)
    /// - `ENFORCE_OPTION_SETS`: "true"/"false" (default: true)
    /// - `CONTACT_SEED_FILE`: path to a JSON array of contacts
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = FormConfig::default();

        let banned_words = Self::parse_env_list("CONTACT_BANNED_WORDS", defaults.banned_words)?;
        if let Some(bad) = banned_words.iter().find(|w| !BannedWords::is_single_word(w)) {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BANNED_WORDS".to_string(),
                reason: format!("Entries must be single words, got: {}", bad),
            });
        }

        let phone_types = Self::parse_env_list("CONTACT_PHONE_TYPES", defaults.phone_types)?;
        let address_types = Self::parse_env_list("CONTACT_ADDRESS_TYPES", defaults.address_types)?;

        let name_min_length =
            Self::parse_env_usize("CONTACT_NAME_MIN_LENGTH", defaults.name_min_length)?;

        let cooldown_ms = Self::parse_env_u64("ADDRESS_COOLDOWN_MS", DEFAULT_ADDRESS_COOLDOWN_MS)?;
        if cooldown_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_COOLDOWN_MS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let enforce_option_sets =
            Self::parse_env_bool("ENFORCE_OPTION_SETS", defaults.enforce_option_sets)?;

        let seed_file = env::var("CONTACT_SEED_FILE")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            form: FormConfig {
                banned_words,
                phone_types,
                address_types,
                name_min_length,
                address_cooldown: Duration::from_millis(cooldown_ms),
                enforce_option_sets,
            },
            seed_file,
            log_level,
        })
    }

    /// Parse a comma-separated environment variable with a default value.
    fn parse_env_list(var_name: &str, default: Vec<String>) -> ConfigResult<Vec<String>> {
        match env::var(var_name) {
            Ok(val) => {
                let items: Vec<String> = val
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if items.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: "List cannot be empty".to_string(),
                    });
                }
                Ok(items)
            }
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            form: FormConfig::default(),
            seed_file: None,
            log_level: "error".to_string(),
        }
    }
}
