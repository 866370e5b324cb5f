//! Third step: card details. The draft is written under `cardInfo`; a draft
//! left under the older `paymentInfo` key is still picked up on mount.

use super::{DraftForm, FieldErrors, StepOutcome};
use crate::wizard::drafts::{Draft, PaymentDraft, PaymentField};
use crate::wizard::navigator::{Navigator, Route};
use crate::wizard::record::MergedRecord;
use crate::wizard::storage::{
    KeyValueStore, PAYMENT_KEY, PAYMENT_LEGACY_KEY, StoreError,
};
use crate::wizard::validators::{
    CARD_NUMBER_DIGITS, CVC_DIGITS, clean_text, digits_only, validate_card_number, validate_cvc,
};
use tracing::debug;

fn check(draft: &PaymentDraft, field: PaymentField) -> Option<&'static str> {
    match field {
        PaymentField::CardType if draft.card_type.is_empty() => Some("Card type is required"),
        PaymentField::CardNumber if !validate_card_number(&draft.card_number) => {
            Some("Card number must be 16 digits")
        }
        PaymentField::Cvc if !validate_cvc(&draft.cvc) => Some("CVC must be 3 digits"),
        PaymentField::CardHolder if draft.card_holder.trim().is_empty() => {
            Some("Cardholder name is required")
        }
        PaymentField::ExpiryMonth if draft.expiry_month.is_empty() => {
            Some("Expiry month is required")
        }
        PaymentField::ExpiryYear if draft.expiry_year.is_empty() => {
            Some("Expiry year is required")
        }
        _ => None,
    }
}

#[derive(Debug)]
pub struct PaymentStep<S> {
    form: DraftForm<PaymentDraft, S>,
}

impl<S: KeyValueStore> PaymentStep<S> {
    pub fn mount(store: S) -> Self {
        Self {
            form: DraftForm::mount(store, PAYMENT_KEY, &[PAYMENT_LEGACY_KEY]),
        }
    }

    #[must_use]
    pub fn draft(&self) -> &PaymentDraft {
        &self.form.draft
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.form.errors
    }

    /// Applies one edit and persists the draft. Card number and CVC keep only
    /// their digits, truncated to 16 and 3.
    pub fn set_field(&mut self, field: PaymentField, value: &str) {
        let value = match field {
            PaymentField::CardNumber => digits_only(value, CARD_NUMBER_DIGITS),
            PaymentField::Cvc => digits_only(value, CVC_DIGITS),
            _ => clean_text(value),
        };
        self.form.write(field, value);
        self.form.recheck_if_flagged(field, check);
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.form.passes(check)
    }

    /// Validates and moves to the confirmation view. No transient state is
    /// forwarded; confirmation reads the stored drafts.
    pub fn next<N: Navigator>(&mut self, navigator: &mut N) -> StepOutcome {
        if !self.form.validate_all(check) {
            debug!(errors = self.form.errors.len(), "payment step blocked");
            return StepOutcome::Blocked;
        }
        navigator.go_to(Route::Confirmation, None);
        StepOutcome::Advanced(Route::Confirmation)
    }

    /// Back to the personal step with the current draft attached.
    pub fn previous<N: Navigator>(&self, navigator: &mut N) {
        let transient = MergedRecord::from(self.form.draft.to_record());
        navigator.go_to(Route::Personal, Some(transient));
    }

    /// The write failure from the latest edit, if it could not be persisted.
    pub fn take_persist_error(&mut self) -> Option<StoreError> {
        self.form.take_persist_error()
    }

    pub fn into_store(self) -> S {
        self.form.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::navigator::RecordingNavigator;
    use crate::wizard::storage::{MemoryStore, load_draft};

    fn fill<S: KeyValueStore>(step: &mut PaymentStep<S>) {
        step.set_field(PaymentField::CardType, "Visa");
        step.set_field(PaymentField::CardNumber, "4111 1111 1111 1111");
        step.set_field(PaymentField::Cvc, "123");
        step.set_field(PaymentField::CardHolder, "Jane Doe");
        step.set_field(PaymentField::ExpiryMonth, "7");
        step.set_field(PaymentField::ExpiryYear, "2030");
    }

    #[test]
    fn long_card_number_is_truncated_before_storing() {
        let mut store = MemoryStore::default();
        PaymentStep::mount(&mut store).set_field(PaymentField::CardNumber, "12345678901234567");

        let stored: PaymentDraft = load_draft(&store, PAYMENT_KEY).expect("stored");
        assert_eq!(stored.card_number, "1234567890123456");
    }

    #[test]
    fn cvc_keeps_three_digits() {
        let mut store = MemoryStore::default();
        let mut step = PaymentStep::mount(&mut store);
        step.set_field(PaymentField::Cvc, "9a8b7c6");
        assert_eq!(step.draft().cvc, "987");
    }

    #[test]
    fn complete_card_advances_to_confirmation() {
        let mut store = MemoryStore::default();
        let mut step = PaymentStep::mount(&mut store);
        let mut navigator = RecordingNavigator::new();
        fill(&mut step);

        assert!(step.can_advance());
        assert_eq!(
            step.next(&mut navigator),
            StepOutcome::Advanced(Route::Confirmation)
        );
        assert!(navigator.last().expect("navigation").transient.is_none());
    }

    #[test]
    fn blank_holder_and_short_number_block() {
        let mut store = MemoryStore::default();
        let mut step = PaymentStep::mount(&mut store);
        let mut navigator = RecordingNavigator::new();
        fill(&mut step);
        step.set_field(PaymentField::CardHolder, "   ");
        step.set_field(PaymentField::CardNumber, "4111");

        assert!(!step.can_advance());
        assert_eq!(step.next(&mut navigator), StepOutcome::Blocked);
        assert_eq!(
            step.errors().get("cardHolder"),
            Some("Cardholder name is required")
        );
        assert_eq!(
            step.errors().get("cardNumber"),
            Some("Card number must be 16 digits")
        );
        assert_eq!(step.errors().len(), 2);

        step.set_field(PaymentField::CardNumber, "4111111111111111");
        assert_eq!(step.errors().get("cardNumber"), None);
    }

    #[test]
    fn legacy_key_is_read_when_card_info_is_missing() {
        let mut store = MemoryStore::default();
        store
            .set(PAYMENT_LEGACY_KEY, r#"{"cardType":"MasterCard"}"#)
            .expect("seed");

        let mut step = PaymentStep::mount(&mut store);
        assert_eq!(step.draft().card_type, "MasterCard");

        step.set_field(PaymentField::Cvc, "321");
        drop(step);
        let stored: PaymentDraft = load_draft(&store, PAYMENT_KEY).expect("stored");
        assert_eq!(stored.card_type, "MasterCard");
    }

    #[test]
    fn card_info_wins_over_legacy_key() {
        let mut store = MemoryStore::default();
        store
            .set(PAYMENT_LEGACY_KEY, r#"{"cardType":"MasterCard"}"#)
            .expect("seed");
        store.set(PAYMENT_KEY, r#"{"cardType":"Visa"}"#).expect("seed");

        let step = PaymentStep::mount(&mut store);
        assert_eq!(step.draft().card_type, "Visa");
    }

    #[test]
    fn previous_forwards_the_draft() {
        let mut store = MemoryStore::default();
        let mut step = PaymentStep::mount(&mut store);
        let mut navigator = RecordingNavigator::new();
        step.set_field(PaymentField::CardType, "Visa");

        step.previous(&mut navigator);
        let last = navigator.last().expect("navigation");
        assert_eq!(last.route, Route::Personal);
        assert_eq!(
            last.transient.as_ref().and_then(|t| t.get("cardType")),
            Some("Visa")
        );
    }
}
