//! Shared UI components exported for routes.

pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use layout::WizardShell;
pub(crate) use ui::{
    Alert, AlertKind, Button, ButtonVariant, SelectField, Spinner, Stepper, TextField,
};
