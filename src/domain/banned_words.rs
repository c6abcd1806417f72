//! Banned-word list applied to free-text fields.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("Failed to compile word regex"));

static SINGLE_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+$").expect("Failed to compile single word regex"));

/// A case-insensitive set of forbidden words.
///
/// Matching is by whole word: the text is split into word tokens and each
/// token is compared against the set, so `"food"` does not match a banned
/// `"foo"`.
///
/// # Example
///
/// ```
/// use contact_form::domain::BannedWords;
///
/// let banned = BannedWords::new(["foo", "bar"]);
/// assert_eq!(banned.find("contains FOO word"), Some("foo".to_string()));
/// assert_eq!(banned.find("food"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannedWords {
    words: BTreeSet<String>,
}

impl BannedWords {
    /// Build the set, trimming and lowercasing each entry. Blank entries are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Returns the first banned word occurring in `text`, lowercased.
    pub fn find(&self, text: &str) -> Option<String> {
        if self.words.is_empty() {
            return None;
        }

        WORD_REGEX
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .find(|token| self.words.contains(token))
    }

    /// Whether `text` contains any banned word.
    pub fn matches(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// Whether `candidate` is usable as a list entry (exactly one word token).
    pub fn is_single_word(candidate: &str) -> bool {
        SINGLE_WORD_REGEX.is_match(candidate.trim())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
