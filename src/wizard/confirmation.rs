//! Confirmation view: rebuilds the full record, renders it read-only and
//! hands it to a [`Submitter`].
//!
//! Reconstruction order on entry:
//!
//! 1. transient navigation state, when present and non-empty;
//! 2. the union of `accountInfo`, `personalInfo` and `cardInfo`, earlier keys
//!    winning on shared field names (only `email` overlaps in practice, so the
//!    account email is the one shown);
//! 3. the legacy `formData` blob, when the step keys yield nothing.
//!
//! An empty result moves the view to `NoData` and sends the user back to the
//! first step.

use crate::wizard::navigator::{Navigator, Route};
use crate::wizard::record::MergedRecord;
use crate::wizard::storage::{
    self, ACCOUNT_KEY, KeyValueStore, PAYMENT_KEY, PERSONAL_KEY, UNIFIED_LEGACY_KEY,
};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const NOT_AVAILABLE: &str = "N/A";
pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully!";
const MASKED_GROUP: &str = "****";

/// Merge order of the per-step keys; first wins.
pub const MERGE_ORDER: [&str; 3] = [ACCOUNT_KEY, PERSONAL_KEY, PAYMENT_KEY];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConfirmationState {
    #[default]
    Loading,
    NoData,
    Loaded(MergedRecord),
}

/// Rebuilds the record shown at confirmation. Never fails: unreadable keys
/// count as absent.
pub fn reconstruct<S: KeyValueStore + ?Sized>(
    store: &S,
    transient: Option<MergedRecord>,
) -> MergedRecord {
    if let Some(record) = transient.filter(|record| !record.is_empty()) {
        debug!(fields = record.len(), "confirmation using transient state");
        return record;
    }

    let merged = MergedRecord::union_first_wins(
        MERGE_ORDER
            .iter()
            .filter_map(|key| storage::load(store, key)),
    );
    if !merged.is_empty() {
        debug!(fields = merged.len(), "confirmation using stored drafts");
        return merged;
    }

    storage::load(store, UNIFIED_LEGACY_KEY)
        .map(MergedRecord::from)
        .unwrap_or_default()
}

/// `**** **** **** 1234`, or fully masked when there is no number.
#[must_use]
pub fn mask_card_number(card_number: &str) -> String {
    if card_number.is_empty() {
        return [MASKED_GROUP; 4].join(" ");
    }
    let chars: Vec<char> = card_number.chars().collect();
    let last_four: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{MASKED_GROUP} {MASKED_GROUP} {MASKED_GROUP} {last_four}")
}

/// One read-only line of the review card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

fn text(record: &MergedRecord, name: &str) -> String {
    record.filled(name).unwrap_or(NOT_AVAILABLE).to_string()
}

/// Review rows in display order. Passwords and the CVC are never shown.
#[must_use]
pub fn summarize(record: &MergedRecord) -> Vec<SummaryRow> {
    let row = |label, value| SummaryRow { label, value };
    let address = ["homeAddress", "state", "country"]
        .map(|name| text(record, name))
        .join(", ");
    let expiry = format!(
        "{}/{}",
        record.filled("expiryMonth").unwrap_or("MM"),
        record.filled("expiryYear").unwrap_or("YYYY"),
    );

    vec![
        row("Salutation", text(record, "salutation")),
        row("Gender", text(record, "gender")),
        row("First Name", text(record, "firstName")),
        row("Last Name", text(record, "lastName")),
        row("Email", text(record, "email")),
        row("Phone", text(record, "phone")),
        row("Address", address),
        row("Zip Code", text(record, "zipCode")),
        row("Username", text(record, "username")),
        row("Card Type", text(record, "cardType")),
        row(
            "Card Number",
            mask_card_number(record.filled("cardNumber").unwrap_or_default()),
        ),
        row("Expiry", expiry),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("nothing to submit")]
    NotLoaded,
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Where a confirmed record goes. The wizard itself never sends anything.
pub trait Submitter {
    /// # Errors
    /// Returns an error if the record is not accepted.
    fn submit(&self, record: &MergedRecord) -> Result<Acknowledgement, SubmitError>;
}

/// Default submitter: logs and acknowledges without sending or storing.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcknowledgeSubmitter;

impl Submitter for AcknowledgeSubmitter {
    fn submit(&self, record: &MergedRecord) -> Result<Acknowledgement, SubmitError> {
        info!(fields = record.len(), "registration submit stub");
        Ok(Acknowledgement {
            message: SUBMITTED_MESSAGE.to_string(),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConfirmationView {
    state: ConfirmationState,
}

impl ConfirmationView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &ConfirmationState {
        &self.state
    }

    #[must_use]
    pub fn record(&self) -> Option<&MergedRecord> {
        match &self.state {
            ConfirmationState::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// Loads the record; with nothing to show, redirects to the first step.
    pub fn enter<S, N>(
        &mut self,
        store: &S,
        transient: Option<MergedRecord>,
        navigator: &mut N,
    ) -> &ConfirmationState
    where
        S: KeyValueStore + ?Sized,
        N: Navigator,
    {
        let record = reconstruct(store, transient);
        if record.is_empty() {
            warn!("no form data found, redirecting");
            self.state = ConfirmationState::NoData;
            navigator.go_to(Route::Account, None);
        } else {
            self.state = ConfirmationState::Loaded(record);
        }
        &self.state
    }

    #[must_use]
    pub fn summary(&self) -> Option<Vec<SummaryRow>> {
        self.record().map(summarize)
    }

    /// Back to payment, carrying the merged record along. The payment step
    /// ignores it. Returns false when nothing is loaded.
    pub fn previous<N: Navigator>(&self, navigator: &mut N) -> bool {
        let Some(record) = self.record() else {
            return false;
        };
        navigator.go_to(Route::Payment, Some(record.clone()));
        true
    }

    /// Manual return from the "No Data Found" panel.
    pub fn go_home<N: Navigator>(&self, navigator: &mut N) {
        navigator.go_to(Route::Account, None);
    }

    /// Hands the loaded record to `submitter`. The view's state and the store
    /// are left untouched.
    ///
    /// # Errors
    /// Returns [`SubmitError::NotLoaded`] outside the loaded state, or the
    /// submitter's own error.
    pub fn submit<T: Submitter + ?Sized>(
        &self,
        submitter: &T,
    ) -> Result<Acknowledgement, SubmitError> {
        let record = self.record().ok_or(SubmitError::NotLoaded)?;
        submitter.submit(record)
    }
}
