//! Field Model: per-field validator state.
//!
//! Values live in the contact itself; this module holds the side table entry
//! for one field: its required flag, constraints, and the errors from the last
//! validity recompute.

use super::value::FieldValue;
use crate::domain::{BannedWords, ValidationError};
use std::sync::Arc;

/// A check applied to non-blank values.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// At least this many characters
    MinLength(usize),

    /// Strictly greater than zero
    Positive,

    /// No word from the list
    NoBannedWords(Arc<BannedWords>),

    /// One of the listed options
    OneOf(Arc<[String]>),
}

impl Constraint {
    /// Check `value`. Blank values always pass; required-ness is checked separately.
    pub fn check(&self, value: &FieldValue) -> Option<ValidationError> {
        if value.is_blank() {
            return None;
        }

        match (self, value) {
            (Self::MinLength(min), FieldValue::Text(text)) => {
                let actual = text.chars().count();
                (actual < *min).then(|| ValidationError::MinLength { min: *min, actual })
            }
            (Self::Positive, FieldValue::Number(Some(n))) => {
                (*n <= 0).then(|| ValidationError::NotPositive(*n))
            }
            (Self::NoBannedWords(words), FieldValue::Text(text)) => {
                words.find(text).map(ValidationError::BannedWord)
            }
            (Self::OneOf(options), FieldValue::Text(text)) => (!options.iter().any(|o| o == text))
                .then(|| ValidationError::UnknownOption(text.clone())),
            _ => None,
        }
    }
}

/// Validator state of one field.
///
/// Validity is cached: it changes only through [`FieldState::update_validity`].
/// `set_required` alone does not revalidate.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    required: bool,
    constraints: Vec<Constraint>,
    errors: Vec<ValidationError>,
    recomputations: u64,
}

impl FieldState {
    pub fn optional() -> Self {
        Self::default()
    }

    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// Add a constraint.
    pub fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Errors `value` would have under the current rules. Pure.
    pub fn validate(&self, value: &FieldValue) -> Vec<ValidationError> {
        if self.required && value.is_blank() {
            return vec![ValidationError::Required];
        }
        self.constraints
            .iter()
            .filter_map(|c| c.check(value))
            .collect()
    }

    /// Recompute and cache the errors for `value`.
    pub fn update_validity(&mut self, value: &FieldValue) {
        self.errors = self.validate(value);
        self.recomputations += 1;
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// How many times validity has been recomputed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_blank_fails() {
        let mut state = FieldState::required();
        state.update_validity(&FieldValue::from(""));
        assert!(!state.is_valid());
        assert_eq!(state.errors(), &[ValidationError::Required]);
    }

    #[test]
    fn test_optional_blank_passes_constraints() {
        let mut state = FieldState::optional().with(Constraint::MinLength(3));
        state.update_validity(&FieldValue::from(""));
        assert!(state.is_valid());
    }

    #[test]
    fn test_min_length_counts_chars() {
        let state = FieldState::required().with(Constraint::MinLength(3));
        assert_eq!(
            state.validate(&FieldValue::from("Jo")),
            vec![ValidationError::MinLength { min: 3, actual: 2 }]
        );
        assert!(state.validate(&FieldValue::from("Zoë")).is_empty());
    }

    #[test]
    fn test_positive() {
        let state = FieldState::optional().with(Constraint::Positive);
        assert!(state.validate(&FieldValue::Number(None)).is_empty());
        assert!(state.validate(&FieldValue::from(1)).is_empty());
        assert_eq!(
            state.validate(&FieldValue::from(0)),
            vec![ValidationError::NotPositive(0)]
        );
    }

    #[test]
    fn test_banned_words() {
        let banned = Arc::new(BannedWords::new(["foo", "bar"]));
        let state = FieldState::optional().with(Constraint::NoBannedWords(banned));
        assert_eq!(
            state.validate(&FieldValue::from("contains foo word")),
            vec![ValidationError::BannedWord("foo".to_string())]
        );
        assert!(state.validate(&FieldValue::from("food")).is_empty());
    }

    #[test]
    fn test_one_of() {
        let options: Arc<[String]> = vec!["home".to_string(), "work".to_string()].into();
        let state = FieldState::optional().with(Constraint::OneOf(options));
        assert!(state.validate(&FieldValue::from("home")).is_empty());
        assert_eq!(
            state.validate(&FieldValue::from("boat")),
            vec![ValidationError::UnknownOption("boat".to_string())]
        );
    }

    #[test]
    fn test_set_required_does_not_revalidate() {
        let mut state = FieldState::optional();
        state.update_validity(&FieldValue::from(""));
        assert!(state.is_valid());

        state.set_required(true);
        assert!(state.is_valid());
        assert_eq!(state.recomputations(), 1);

        state.update_validity(&FieldValue::from(""));
        assert!(!state.is_valid());
        assert_eq!(state.recomputations(), 2);
    }
}
