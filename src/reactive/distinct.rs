//! Distinct-change filter.

/// Suppresses a value equal to the one observed immediately before it.
///
/// The first observed value always passes.
#[derive(Debug, Clone)]
pub struct DistinctUntilChanged<T> {
    last: Option<T>,
}

impl<T> Default for DistinctUntilChanged<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: PartialEq + Clone> DistinctUntilChanged<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value`, returning true if it differs from the previous one.
    pub fn observe(&mut self, value: &T) -> bool {
        if self.last.as_ref() == Some(value) {
            return false;
        }
        self.last = Some(value.clone());
        true
    }

    /// The last value that passed the filter.
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }
}
