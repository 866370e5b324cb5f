//! Second step: personal details. Email, phone and zip code are checked on
//! every edit; the remaining fields only need a value.

use super::{DraftForm, FieldErrors, StepOutcome};
use crate::wizard::drafts::{Draft, PersonalDraft, PersonalField};
use crate::wizard::navigator::{Navigator, Route};
use crate::wizard::record::MergedRecord;
use crate::wizard::storage::{KeyValueStore, PERSONAL_KEY, StoreError};
use crate::wizard::validators::{
    PHONE_DIGITS, ZIP_DIGITS, clean_text, digits_only, validate_email, validate_phone,
    validate_zip,
};
use tracing::debug;

fn required_message(field: PersonalField) -> &'static str {
    match field {
        PersonalField::Salutation => "Salutation is required",
        PersonalField::Gender => "Gender is required",
        PersonalField::FirstName => "First Name is required",
        PersonalField::LastName => "Last Name is required",
        PersonalField::Email => "Email is required",
        PersonalField::Phone => "Phone is required",
        PersonalField::ZipCode => "Zip Code is required",
        PersonalField::State => "State is required",
        PersonalField::HomeAddress => "Home Address is required",
        PersonalField::Country => "Country is required",
    }
}

fn check(draft: &PersonalDraft, field: PersonalField) -> Option<&'static str> {
    let value = draft.value(field);
    if value.trim().is_empty() {
        return Some(required_message(field));
    }
    match field {
        PersonalField::Email if !validate_email(value) => Some("Invalid email format."),
        PersonalField::Phone if !validate_phone(value) => Some("Phone number must be 10 digits."),
        PersonalField::ZipCode if !validate_zip(value) => {
            Some("Zip code must be exactly 6 digits.")
        }
        _ => None,
    }
}

fn is_live_checked(field: PersonalField) -> bool {
    matches!(
        field,
        PersonalField::Email | PersonalField::Phone | PersonalField::ZipCode
    )
}

#[derive(Debug)]
pub struct PersonalStep<S> {
    form: DraftForm<PersonalDraft, S>,
}

impl<S: KeyValueStore> PersonalStep<S> {
    pub fn mount(store: S) -> Self {
        Self {
            form: DraftForm::mount(store, PERSONAL_KEY, &[]),
        }
    }

    #[must_use]
    pub fn draft(&self) -> &PersonalDraft {
        &self.form.draft
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.form.errors
    }

    /// Applies one edit and persists the draft. Phone and zip code keep only
    /// their digits (at most 10 and 6); everything else is trimmed.
    pub fn set_field(&mut self, field: PersonalField, value: &str) {
        let value = match field {
            PersonalField::Phone => digits_only(value, PHONE_DIGITS),
            PersonalField::ZipCode => digits_only(value, ZIP_DIGITS),
            _ => clean_text(value),
        };
        self.form.write(field, value);

        if is_live_checked(field) {
            let message = check(&self.form.draft, field);
            self.form.set_error(field, message);
        } else {
            self.form.recheck_if_flagged(field, check);
        }
    }

    /// All fields filled and email, phone and zip code well formed.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.form.passes(check)
    }

    pub fn next<N: Navigator>(&mut self, navigator: &mut N) -> StepOutcome {
        if !self.form.validate_all(check) {
            debug!(errors = self.form.errors.len(), "personal step blocked");
            return StepOutcome::Blocked;
        }
        navigator.go_to(Route::Payment, None);
        StepOutcome::Advanced(Route::Payment)
    }

    /// Back to the account step, handing over the current draft. The account
    /// step does not read it.
    pub fn previous<N: Navigator>(&self, navigator: &mut N) {
        let transient = MergedRecord::from(self.form.draft.to_record());
        navigator.go_to(Route::Account, Some(transient));
    }

    /// The write failure from the latest edit, if it could not be persisted.
    pub fn take_persist_error(&mut self) -> Option<StoreError> {
        self.form.take_persist_error()
    }

    pub fn into_store(self) -> S {
        self.form.store
    }
}
