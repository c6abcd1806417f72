//! Repeated-Record Collection: an ordered, grow-only list of records.

use super::record::{RecordForm, RecordRule};
use super::schema::{FieldSchema, SchemaContext};
use super::value::FieldValue;
use crate::error::{FormError, FormResult};

/// One record and the rule bound to it when it was created.
#[derive(Debug)]
struct Entry<S: FieldSchema, R> {
    form: RecordForm<S>,
    rule: R,
}

/// An ordered list of records of one schema, starting with one default record.
///
/// Records can be appended but never removed. Each record gets its own
/// instance of `R` at creation, so appended records react exactly like the
/// first one.
#[derive(Debug)]
pub struct RecordCollection<S: FieldSchema, R: RecordRule<S>> {
    ctx: SchemaContext,
    entries: Vec<Entry<S, R>>,
}

impl<S: FieldSchema, R: RecordRule<S>> RecordCollection<S, R> {
    pub fn new(ctx: SchemaContext) -> Self {
        let mut collection = Self {
            ctx,
            entries: Vec::new(),
        };
        collection.append();
        collection
    }

    /// Add a record at schema defaults. Returns its index.
    pub fn append(&mut self) -> usize {
        self.entries.push(Entry {
            form: RecordForm::new(&self.ctx),
            rule: R::bind(),
        });
        self.entries.len() - 1
    }

    /// Append records until the collection holds exactly `len`.
    ///
    /// # Errors
    ///
    /// `FormError::ShapeMismatch` if `len` is zero or smaller than the current
    /// length; nothing is appended in that case.
    pub fn grow_to(&mut self, len: usize) -> FormResult<()> {
        self.check_growable(len)?;
        while self.entries.len() < len {
            self.append();
        }
        Ok(())
    }

    /// Whether [`RecordCollection::grow_to`] would accept `len`.
    pub fn check_growable(&self, len: usize) -> FormResult<()> {
        if len == 0 || len < self.entries.len() {
            return Err(FormError::ShapeMismatch {
                collection: S::NAME,
                expected: len,
                actual: self.entries.len(),
            });
        }
        Ok(())
    }

    /// Assign `values` in order, field by field, through each record's rule.
    ///
    /// # Errors
    ///
    /// `FormError::ShapeMismatch` if `values` and the collection differ in
    /// length; nothing is assigned in that case.
    pub fn assign(&mut self, values: Vec<S>) -> FormResult<()> {
        if values.len() != self.entries.len() {
            return Err(FormError::ShapeMismatch {
                collection: S::NAME,
                expected: values.len(),
                actual: self.entries.len(),
            });
        }

        for (index, value) in values.into_iter().enumerate() {
            for &field in S::FIELDS {
                self.set_value(index, field, value.read(field))?;
            }
        }
        Ok(())
    }

    /// Write one field of one record, then run that record's rule.
    ///
    /// # Errors
    ///
    /// `NoSuchRecord` for an index past the end, `TypeMismatch` for a value of
    /// the wrong kind.
    pub fn set_value(&mut self, index: usize, field: S::Field, value: FieldValue) -> FormResult<()> {
        let len = self.entries.len();
        let entry = self.entries.get_mut(index).ok_or(FormError::NoSuchRecord {
            collection: S::NAME,
            index,
            len,
        })?;

        let actual = value.kind();
        entry
            .form
            .set_value(field, value)
            .map_err(|expected| FormError::TypeMismatch {
                path: format!("{}[{}].{}", S::NAME, index, field),
                expected,
                actual,
            })?;
        entry.rule.on_change(field, &mut entry.form);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&RecordForm<S>> {
        self.entries.get(index).map(|e| &e.form)
    }

    /// Set the required flag of every field of every record and recompute.
    pub fn require_all(&mut self, required: bool) {
        for entry in &mut self.entries {
            entry.form.require_all(required);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a collection starts with one record and never shrinks.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|e| e.form.is_valid())
    }

    /// Current values in order.
    pub fn snapshot(&self) -> Vec<S> {
        self.entries.iter().map(|e| e.form.value().clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordForm<S>> + '_ {
        self.entries.iter().map(|e| &e.form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::form::path::AddressField;
    use crate::form::record::NoRule;
    use crate::models::Address;

    fn addresses() -> RecordCollection<Address, NoRule> {
        RecordCollection::new(SchemaContext::new(&FormConfig::default()))
    }

    fn full_address(city: &str) -> Address {
        Address {
            street_address: "1 Main St".to_string(),
            city: city.to_string(),
            state: "OR".to_string(),
            postal_code: "97201".to_string(),
            address_type: "home".to_string(),
        }
    }

    #[test]
    fn test_starts_with_one_record() {
        let collection = addresses();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.snapshot(), vec![Address::default()]);
    }

    #[test]
    fn test_append_adds_default_record() {
        let mut collection = addresses();
        assert_eq!(collection.append(), 1);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(1).unwrap().value(), &Address::default());
    }

    #[test]
    fn test_valid_only_when_every_record_valid() {
        let mut collection = addresses();
        collection.assign(vec![full_address("Portland")]).unwrap();
        assert!(collection.is_valid());

        collection.append();
        assert!(!collection.is_valid());
    }

    #[test]
    fn test_assign_length_mismatch_fails() {
        let mut collection = addresses();
        let result = collection.assign(vec![full_address("A"), full_address("B")]);

        match result {
            Err(FormError::ShapeMismatch {
                collection: name,
                expected,
                actual,
            }) => {
                assert_eq!(name, "addresses");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Expected ShapeMismatch, got: {:?}", other),
        }
        assert_eq!(collection.snapshot(), vec![Address::default()]);
    }

    #[test]
    fn test_grow_then_assign_preserves_order() {
        let mut collection = addresses();
        collection.grow_to(3).unwrap();
        collection
            .assign(vec![full_address("A"), full_address("B"), full_address("C")])
            .unwrap();

        let cities: Vec<_> = collection.snapshot().into_iter().map(|a| a.city).collect();
        assert_eq!(cities, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_grow_never_shrinks() {
        let mut collection = addresses();
        collection.grow_to(2).unwrap();
        assert!(matches!(
            collection.grow_to(1),
            Err(FormError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            collection.grow_to(0),
            Err(FormError::ShapeMismatch { .. })
        ));
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_set_value_out_of_range() {
        let mut collection = addresses();
        let result = collection.set_value(4, AddressField::City, "X".into());
        assert!(matches!(
            result,
            Err(FormError::NoSuchRecord { index: 4, len: 1, .. })
        ));
    }

    #[test]
    fn test_set_value_wrong_kind() {
        let mut collection = addresses();
        let result = collection.set_value(0, AddressField::City, true.into());
        match result {
            Err(FormError::TypeMismatch { path, .. }) => assert_eq!(path, "addresses[0].city"),
            other => panic!("Expected TypeMismatch, got: {:?}", other),
        }
    }
}
