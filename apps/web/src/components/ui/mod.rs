mod alert;
mod button;
mod field;
mod spinner;
mod stepper;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use field::{SelectField, TextField};
pub(crate) use spinner::Spinner;
pub(crate) use stepper::Stepper;
