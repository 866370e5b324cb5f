//! Step controllers: one per form page.
//!
//! Every controller owns its draft and a parallel error map, persists the whole
//! draft after each edit, and only navigates forward when its rules pass.
//! Validation errors never block editing or persistence. A failed write never
//! blocks editing either; it is held until the caller takes it.

pub mod account;
pub mod payment;
pub mod personal;

pub use account::AccountStep;
pub use payment::PaymentStep;
pub use personal::PersonalStep;

use crate::wizard::drafts::{Draft, DraftField};
use crate::wizard::navigator::Route;
use crate::wizard::storage::{self, KeyValueStore, StoreError};
use std::collections::BTreeMap;
use std::collections::btree_map;
use tracing::warn;

/// Result of a "next" request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced(Route),
    Blocked,
}

/// Inline error messages keyed by field wire name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<&'static str, &'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.entries.get(field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, &'static str, &'static str> {
        self.entries.iter()
    }

    fn set<F: DraftField>(&mut self, field: F, message: Option<&'static str>) {
        match message {
            Some(message) => {
                self.entries.insert(field.name(), message);
            }
            None => {
                self.entries.remove(field.name());
            }
        }
    }

    fn contains<F: DraftField>(&self, field: F) -> bool {
        self.entries.contains_key(field.name())
    }
}

/// Validation rule for one field of a draft.
type Rule<D> = fn(&D, <D as Draft>::Field) -> Option<&'static str>;

/// Shared plumbing of the step controllers: the draft, its error map, and the
/// store it is written to.
#[derive(Debug)]
struct DraftForm<D, S> {
    store: S,
    key: &'static str,
    draft: D,
    errors: FieldErrors,
    persist_error: Option<StoreError>,
}

impl<D: Draft, S: KeyValueStore> DraftForm<D, S> {
    /// Rehydrates from `key`, then from `fallback_keys` in order, else starts
    /// from the empty draft.
    fn mount(store: S, key: &'static str, fallback_keys: &[&str]) -> Self {
        let draft = std::iter::once(key)
            .chain(fallback_keys.iter().copied())
            .find_map(|candidate| storage::load_draft::<S, D>(&store, candidate))
            .unwrap_or_default();

        Self {
            store,
            key,
            draft,
            errors: FieldErrors::default(),
            persist_error: None,
        }
    }

    fn write(&mut self, field: D::Field, value: String) {
        *self.draft.value_mut(field) = value;
        self.persist();
    }

    /// Keeps the latest write failure; a later successful write clears it.
    fn persist(&mut self) {
        self.persist_error = storage::save_draft(&mut self.store, self.key, &self.draft)
            .inspect_err(|err| warn!(key = self.key, error = %err, "failed to persist draft"))
            .err();
    }

    fn take_persist_error(&mut self) -> Option<StoreError> {
        self.persist_error.take()
    }

    fn set_error(&mut self, field: D::Field, message: Option<&'static str>) {
        self.errors.set(field, message);
    }

    /// Re-checks `field` only if it is currently flagged, so fixed input
    /// clears its message without surfacing new ones mid-edit.
    fn recheck_if_flagged(&mut self, field: D::Field, rule: Rule<D>) {
        if self.errors.contains(field) {
            let message = rule(&self.draft, field);
            self.errors.set(field, message);
        }
    }

    /// Rebuilds the whole error map from `rule`; true if nothing failed.
    fn validate_all(&mut self, rule: Rule<D>) -> bool {
        let mut errors = FieldErrors::default();
        for field in D::Field::ALL.iter().copied() {
            errors.set(field, rule(&self.draft, field));
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    fn passes(&self, rule: Rule<D>) -> bool {
        D::Field::ALL
            .iter()
            .all(|field| rule(&self.draft, *field).is_none())
    }
}
