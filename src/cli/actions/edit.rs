//! `set` and `next`: drive one step controller against the draft file.

use crate::cli::globals::GlobalArgs;
use crate::wizard::{
    AccountField, AccountStep, Draft, DraftField, FieldErrors, KeyValueStore, PaymentField,
    PaymentStep, PersonalField, PersonalStep, RecordingNavigator, StepOutcome, StoreError,
    mask_card_number,
};
use anyhow::{Context, Result, anyhow, bail};
use std::fmt;
use std::io::Write;
use tracing::debug;

const REDACTED: &str = "********";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Account,
    Personal,
    Payment,
}

impl Step {
    /// # Errors
    /// Returns an error for anything but `account`, `personal` or `payment`.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "account" => Ok(Self::Account),
            "personal" => Ok(Self::Personal),
            "payment" => Ok(Self::Payment),
            other => Err(anyhow!("unknown step: {other}")),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Personal => "personal",
            Self::Payment => "payment",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct SetArgs {
    pub globals: GlobalArgs,
    pub step: Step,
    pub field: String,
    pub value: String,
}

#[derive(Debug)]
pub struct NextArgs {
    pub globals: GlobalArgs,
    pub step: Step,
}

/// Common surface of the three step controllers.
trait Controller {
    type Field: DraftField;

    /// Applies the edit, failing if the draft could not be saved.
    fn apply(&mut self, field: Self::Field, value: &str) -> Result<(), StoreError>;

    /// Value as it may be echoed back: secrets redacted, card number masked.
    fn shown(&self, field: Self::Field) -> String;

    fn field_errors(&self) -> &FieldErrors;

    fn advance(&mut self, navigator: &mut RecordingNavigator) -> StepOutcome;
}

impl<S: KeyValueStore> Controller for AccountStep<S> {
    type Field = AccountField;

    fn apply(&mut self, field: AccountField, value: &str) -> Result<(), StoreError> {
        self.set_field(field, value);
        self.take_persist_error().map_or(Ok(()), Err)
    }

    fn shown(&self, field: AccountField) -> String {
        let value = self.draft().value(field);
        match field {
            AccountField::Password | AccountField::ConfirmPassword if !value.is_empty() => {
                REDACTED.to_string()
            }
            _ => value.to_string(),
        }
    }

    fn field_errors(&self) -> &FieldErrors {
        self.errors()
    }

    fn advance(&mut self, navigator: &mut RecordingNavigator) -> StepOutcome {
        self.next(navigator)
    }
}

impl<S: KeyValueStore> Controller for PersonalStep<S> {
    type Field = PersonalField;

    fn apply(&mut self, field: PersonalField, value: &str) -> Result<(), StoreError> {
        self.set_field(field, value);
        self.take_persist_error().map_or(Ok(()), Err)
    }

    fn shown(&self, field: PersonalField) -> String {
        self.draft().value(field).to_string()
    }

    fn field_errors(&self) -> &FieldErrors {
        self.errors()
    }

    fn advance(&mut self, navigator: &mut RecordingNavigator) -> StepOutcome {
        self.next(navigator)
    }
}

impl<S: KeyValueStore> Controller for PaymentStep<S> {
    type Field = PaymentField;

    fn apply(&mut self, field: PaymentField, value: &str) -> Result<(), StoreError> {
        self.set_field(field, value);
        self.take_persist_error().map_or(Ok(()), Err)
    }

    fn shown(&self, field: PaymentField) -> String {
        let value = self.draft().value(field);
        match field {
            PaymentField::CardNumber => mask_card_number(value),
            PaymentField::Cvc if !value.is_empty() => REDACTED.to_string(),
            _ => value.to_string(),
        }
    }

    fn field_errors(&self) -> &FieldErrors {
        self.errors()
    }

    fn advance(&mut self, navigator: &mut RecordingNavigator) -> StepOutcome {
        self.next(navigator)
    }
}

fn write_errors<W: Write>(errors: &FieldErrors, out: &mut W) -> Result<()> {
    for (field, message) in errors.iter() {
        writeln!(out, "  {field}: {message}")?;
    }
    Ok(())
}

fn set_on<C: Controller, W: Write>(
    controller: &mut C,
    field: &str,
    value: &str,
    out: &mut W,
) -> Result<()> {
    let Some(field) = C::Field::from_name(field) else {
        let known: Vec<&str> = C::Field::ALL.iter().map(|f| f.name()).collect();
        bail!("unknown field: {field} (expected one of: {})", known.join(", "));
    };
    controller
        .apply(field, value)
        .with_context(|| format!("failed to save draft after editing {}", field.name()))?;
    writeln!(out, "{}: {}", field.label(), controller.shown(field))?;
    write_errors(controller.field_errors(), out)
}

fn next_on<C: Controller, W: Write>(step: Step, controller: &mut C, out: &mut W) -> Result<()> {
    let mut navigator = RecordingNavigator::new();
    match controller.advance(&mut navigator) {
        StepOutcome::Advanced(route) => {
            writeln!(out, "{}: {route}", route.title())?;
            Ok(())
        }
        StepOutcome::Blocked => {
            write_errors(controller.field_errors(), out)?;
            bail!("{step} step is incomplete")
        }
    }
}

/// Apply one field edit, persisting the draft.
/// # Errors
/// Returns an error if the store cannot be opened, the field is unknown, or
/// the edited draft cannot be written back.
pub fn set<W: Write>(args: SetArgs, out: &mut W) -> Result<()> {
    let mut store = args.globals.open_store()?;
    debug!(step = %args.step, field = %args.field, "set field");
    match args.step {
        Step::Account => set_on(
            &mut AccountStep::mount(&mut store),
            &args.field,
            &args.value,
            out,
        ),
        Step::Personal => set_on(
            &mut PersonalStep::mount(&mut store),
            &args.field,
            &args.value,
            out,
        ),
        Step::Payment => set_on(
            &mut PaymentStep::mount(&mut store),
            &args.field,
            &args.value,
            out,
        ),
    }
}

/// Validate a step and report the route it would move to.
/// # Errors
/// Returns an error if the store cannot be opened or the step is incomplete.
pub fn next<W: Write>(args: NextArgs, out: &mut W) -> Result<()> {
    let mut store = args.globals.open_store()?;
    match args.step {
        Step::Account => next_on(args.step, &mut AccountStep::mount(&mut store), out),
        Step::Personal => next_on(args.step, &mut PersonalStep::mount(&mut store), out),
        Step::Payment => next_on(args.step, &mut PaymentStep::mount(&mut store), out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn globals(dir: &tempfile::TempDir) -> GlobalArgs {
        GlobalArgs::new(dir.path().join("drafts.json"))
    }

    fn run_set(globals: &GlobalArgs, step: Step, field: &str, value: &str) -> Result<String> {
        let mut out = Vec::new();
        set(
            SetArgs {
                globals: globals.clone(),
                step,
                field: field.to_string(),
                value: value.to_string(),
            },
            &mut out,
        )?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn step_names_parse() {
        assert_eq!(Step::parse("account").expect("step"), Step::Account);
        assert_eq!(Step::parse("payment").expect("step"), Step::Payment);
        assert!(Step::parse("billing").is_err());
    }

    #[test]
    fn set_echoes_the_sanitized_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let globals = globals(&dir);

        let output = run_set(&globals, Step::Personal, "phone", "555-123-4567").expect("set");
        assert_eq!(output, "Phone: 5551234567\n");
    }

    #[test]
    fn set_reports_live_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let globals = globals(&dir);

        let output = run_set(&globals, Step::Personal, "zipCode", "12").expect("set");
        assert_eq!(
            output,
            "Zip Code: 12\n  zipCode: Zip code must be exactly 6 digits.\n"
        );
    }

    #[test]
    fn secrets_are_not_echoed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let globals = globals(&dir);

        let output = run_set(&globals, Step::Account, "password", "hunter2").expect("set");
        assert_eq!(output, "Password: ********\n");

        let output =
            run_set(&globals, Step::Payment, "cardNumber", "4111111111111111").expect("set");
        assert_eq!(output, "Card Number: **** **** **** 1111\n");
    }

    #[test]
    fn unknown_field_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = run_set(&globals(&dir), Step::Account, "nickname", "bob")
            .expect_err("unknown field");
        assert!(err.to_string().contains("unknown field: nickname"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn set_fails_when_the_draft_cannot_be_written() {
        let globals = GlobalArgs::new("/proc/formwizard_missing/drafts.json".into());

        let err = run_set(&globals, Step::Account, "username", "bob").expect_err("save failure");
        assert!(
            format!("{err:#}").contains("failed to save draft after editing username"),
            "unexpected error: {err:#}"
        );
    }

    #[test]
    fn next_blocks_until_complete() {
        let dir = tempfile::tempdir().expect("tempdir");
        let globals = globals(&dir);

        let mut out = Vec::new();
        let result = next(
            NextArgs {
                globals: globals.clone(),
                step: Step::Account,
            },
            &mut out,
        );
        assert!(result.is_err());
        let report = String::from_utf8(out).expect("utf8");
        assert!(report.contains("username: Username is required"));

        for (field, value) in [
            ("username", "bob"),
            ("email", "bob@example.com"),
            ("password", "pw"),
            ("confirmPassword", "pw"),
        ] {
            run_set(&globals, Step::Account, field, value).expect("set");
        }

        let mut out = Vec::new();
        next(
            NextArgs {
                globals,
                step: Step::Account,
            },
            &mut out,
        )
        .expect("next");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Personal Information: /personlinfo\n"
        );
    }
}
