//! Conditional Validator Engine.
//!
//! Two rules rewrite required flags in reaction to value changes:
//!
//! - [`PreferredNumberRule`] is bound to every phone record and makes the
//!   number required exactly while the phone is marked preferred.
//! - [`AddressRules`] watches the whole address collection. Any distinct
//!   change relaxes every address field at once; after a quiet period with no
//!   further distinct change every field is required again.
//!
//! Neither rule writes values, so recomputing validity never feeds back into
//! the observers.

use super::path::PhoneField;
use super::record::{RecordForm, RecordRule};
use crate::error::FormResult;
use crate::models::{Address, Phone};
use crate::reactive::{Debouncer, DistinctUntilChanged};
use std::time::Duration;
use tracing::debug;

/// Phone number required iff the phone is preferred.
#[derive(Debug, Default)]
pub struct PreferredNumberRule {
    preferred: DistinctUntilChanged<bool>,
}

impl RecordRule<Phone> for PreferredNumberRule {
    fn bind() -> Self {
        Self::default()
    }

    fn on_change(&mut self, changed: PhoneField, record: &mut RecordForm<Phone>) {
        if changed != PhoneField::Preferred {
            return;
        }

        let preferred = record.value().preferred;
        if !self.preferred.observe(&preferred) {
            return;
        }

        record.set_required(PhoneField::Number, preferred);
        record.update_validity(PhoneField::Number);
        debug!(preferred, "phone number requirement updated");
    }
}

/// What an address change asks the owner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressReaction {
    /// Make every address field optional now
    pub relax: bool,

    /// Generation of the restore timer armed for this change
    pub restore_armed: Option<u64>,
}

/// The two address-collection observers.
///
/// Each keeps its own distinct-change filter over the aggregate address value.
#[derive(Debug)]
pub struct AddressRules {
    relax_filter: DistinctUntilChanged<Vec<Address>>,
    restore_filter: DistinctUntilChanged<Vec<Address>>,
    restore_timer: Debouncer,
}

impl AddressRules {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            relax_filter: DistinctUntilChanged::new(),
            restore_filter: DistinctUntilChanged::new(),
            restore_timer: Debouncer::new(cooldown),
        }
    }

    /// Feed the current address collection value.
    ///
    /// `restore` runs after the quiet period with the generation it was armed
    /// under; the owner must confirm it with [`AddressRules::is_current`]
    /// before requiring the fields again.
    ///
    /// # Errors
    ///
    /// `FormError::NoRuntime` if the restore timer cannot be armed. Neither
    /// filter sees the value in that case, so the same value observed later
    /// inside a runtime still relaxes and arms.
    pub fn observe<F>(&mut self, addresses: &[Address], restore: F) -> FormResult<AddressReaction>
    where
        F: FnOnce(u64) + Send + 'static,
    {
        Debouncer::runtime()?;

        let value = addresses.to_vec();
        let mut reaction = AddressReaction {
            relax: self.relax_filter.observe(&value),
            restore_armed: None,
        };

        if self.restore_filter.observe(&value) {
            let generation = self.restore_timer.schedule(restore)?;
            debug!(
                generation,
                cooldown_ms = self.restore_timer.delay().as_millis() as u64,
                "address restore timer armed"
            );
            reaction.restore_armed = Some(generation);
        }

        Ok(reaction)
    }

    /// Whether `generation` is the latest armed restore.
    pub fn is_current(&self, generation: u64) -> bool {
        self.restore_timer.is_current(generation)
    }

    /// Whether a restore is waiting for the quiet period to end.
    pub fn restore_pending(&self) -> bool {
        self.restore_timer.is_pending()
    }

    pub fn cooldown(&self) -> Duration {
        self.restore_timer.delay()
    }
}
