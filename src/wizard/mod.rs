//! Multi-step registration wizard: account, personal and payment steps
//! followed by a read-only confirmation.
//!
//! ## Flow
//!
//! `/` (account) -> `/personlinfo` (personal) -> `/cardinfo` (payment) ->
//! `/viewpage` (confirmation), with "previous" allowed back up the chain.
//!
//! Each step controller rehydrates its draft from the store on mount, writes
//! the full draft back after every edit, and only navigates forward when its
//! rules pass. The confirmation view merges the three drafts for display and
//! masks the card number. Payment data is stored unencrypted; callers must not
//! log drafts with secrets (the `Debug` impls redact them).

pub mod confirmation;
pub mod drafts;
pub mod navigator;
pub mod options;
pub mod record;
pub mod steps;
pub mod storage;
pub mod validators;

pub use confirmation::{
    AcknowledgeSubmitter, Acknowledgement, ConfirmationState, ConfirmationView, SubmitError,
    Submitter, SummaryRow, mask_card_number,
};
pub use drafts::{
    AccountDraft, AccountField, Draft, DraftField, PaymentDraft, PaymentField, PersonalDraft,
    PersonalField,
};
pub use navigator::{Handoff, Navigation, Navigator, RecordingNavigator, Route};
pub use record::MergedRecord;
pub use steps::{AccountStep, FieldErrors, PaymentStep, PersonalStep, StepOutcome};
pub use storage::{
    JsonFileStore, KeyValueStore, MemoryStore, PrefixedStore, Record, StoreError, clear_drafts,
};
