//! First step: credentials. Advancing needs every field and a matching
//! password confirmation; the email format is not checked here.

use super::{DraftForm, FieldErrors, StepOutcome};
use crate::wizard::drafts::{AccountDraft, AccountField};
use crate::wizard::navigator::{Navigator, Route};
use crate::wizard::storage::{ACCOUNT_KEY, KeyValueStore, StoreError};
use crate::wizard::validators::clean_text;
use tracing::debug;

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

fn check(draft: &AccountDraft, field: AccountField) -> Option<&'static str> {
    match field {
        AccountField::Username if draft.username.is_empty() => Some("Username is required"),
        AccountField::Email if draft.email.is_empty() => Some("Email is required"),
        AccountField::Password if draft.password.is_empty() => Some("Password is required"),
        // A mismatch outranks a blank confirmation once a password is set.
        AccountField::ConfirmPassword if draft.password != draft.confirm_password => {
            Some(PASSWORDS_DO_NOT_MATCH)
        }
        AccountField::ConfirmPassword if draft.confirm_password.is_empty() => {
            Some("Confirm Password is required")
        }
        _ => None,
    }
}

#[derive(Debug)]
pub struct AccountStep<S> {
    form: DraftForm<AccountDraft, S>,
}

impl<S: KeyValueStore> AccountStep<S> {
    pub fn mount(store: S) -> Self {
        Self {
            form: DraftForm::mount(store, ACCOUNT_KEY, &[]),
        }
    }

    #[must_use]
    pub fn draft(&self) -> &AccountDraft {
        &self.form.draft
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.form.errors
    }

    /// Applies one edit and persists the draft. Username and email are
    /// trimmed; passwords are kept verbatim.
    pub fn set_field(&mut self, field: AccountField, value: &str) {
        let value = match field {
            AccountField::Username | AccountField::Email => clean_text(value),
            AccountField::Password | AccountField::ConfirmPassword => value.to_string(),
        };
        self.form.write(field, value);

        self.form.recheck_if_flagged(field, check);
        let draft = &self.form.draft;
        if matches!(
            field,
            AccountField::Password | AccountField::ConfirmPassword
        ) && !draft.password.is_empty()
            && !draft.confirm_password.is_empty()
        {
            let message = check(draft, AccountField::ConfirmPassword);
            self.form.set_error(AccountField::ConfirmPassword, message);
        }
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.form.passes(check)
    }

    /// Validates every field and moves to the personal step if they pass.
    pub fn next<N: Navigator>(&mut self, navigator: &mut N) -> StepOutcome {
        if !self.form.validate_all(check) {
            debug!(errors = self.form.errors.len(), "account step blocked");
            return StepOutcome::Blocked;
        }
        navigator.go_to(Route::Personal, None);
        StepOutcome::Advanced(Route::Personal)
    }

    /// The write failure from the latest edit, if it could not be persisted.
    pub fn take_persist_error(&mut self) -> Option<StoreError> {
        self.form.take_persist_error()
    }

    pub fn into_store(self) -> S {
        self.form.store
    }
}
