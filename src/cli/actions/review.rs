use crate::cli::globals::GlobalArgs;
use crate::wizard::{
    AcknowledgeSubmitter, ConfirmationState, ConfirmationView, RecordingNavigator, Route,
};
use anyhow::{Result, bail};
use std::io::Write;

pub const NO_DATA: &str = "No Data Found";

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

fn enter(globals: &GlobalArgs) -> Result<ConfirmationView> {
    let store = globals.open_store()?;
    let mut view = ConfirmationView::new();
    let mut navigator = RecordingNavigator::new();
    view.enter(&store, None, &mut navigator);
    Ok(view)
}

/// Print the confirmation summary, or the empty notice.
/// # Errors
/// Returns an error if the store cannot be opened or `out` cannot be written.
pub fn review<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let view = enter(&args.globals)?;
    let Some(rows) = view.summary() else {
        writeln!(out, "{NO_DATA}")?;
        writeln!(out, "Start over at {}", Route::Account)?;
        return Ok(());
    };

    writeln!(out, "{}", Route::Confirmation.title())?;
    let width = rows.iter().map(|row| row.label.len()).max().unwrap_or(0);
    for row in rows {
        writeln!(out, "{:<width$}  {}", row.label, row.value)?;
    }
    Ok(())
}

/// Hand the reconstructed record to the submitter.
/// # Errors
/// Returns an error if nothing is stored or the submitter rejects it.
pub fn submit<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let view = enter(&args.globals)?;
    if matches!(view.state(), ConfirmationState::NoData) {
        bail!("{NO_DATA}");
    }
    let acknowledgement = view.submit(&AcknowledgeSubmitter)?;
    writeln!(out, "{}", acknowledgement.message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::KeyValueStore;
    use crate::wizard::storage::{ACCOUNT_KEY, PAYMENT_KEY, PERSONAL_KEY};

    fn seeded(dir: &tempfile::TempDir) -> GlobalArgs {
        let globals = GlobalArgs::new(dir.path().join("drafts.json"));
        let mut store = globals.open_store().expect("open");
        store
            .set(
                ACCOUNT_KEY,
                r#"{"username":"bob","email":"bob@x.io","password":"pw","confirmPassword":"pw"}"#,
            )
            .expect("seed");
        store
            .set(PERSONAL_KEY, r#"{"firstName":"Bob","email":"other@x.io"}"#)
            .expect("seed");
        store
            .set(PAYMENT_KEY, r#"{"cardNumber":"4111111111111111","cvc":"123"}"#)
            .expect("seed");
        globals
    }

    #[test]
    fn review_prints_rows_without_secrets() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut out = Vec::new();
        review(
            Args {
                globals: seeded(&dir),
            },
            &mut out,
        )
        .expect("review");

        let report = String::from_utf8(out).expect("utf8");
        assert!(report.starts_with("Confirm Your Details\n"));
        assert!(report.contains("bob@x.io"));
        assert!(!report.contains("other@x.io"));
        assert!(report.contains("**** **** **** 1111"));
        assert!(!report.contains("4111111111111111"));
        assert!(!report.contains("pw"));
        assert!(report.contains("Gender       N/A"));
    }

    #[test]
    fn review_without_data_reports_it() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut out = Vec::new();
        review(
            Args {
                globals: GlobalArgs::new(dir.path().join("empty.json")),
            },
            &mut out,
        )
        .expect("review");

        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "No Data Found\nStart over at /\n"
        );
    }

    #[test]
    fn submit_acknowledges_and_keeps_drafts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let globals = seeded(&dir);
        let mut out = Vec::new();
        submit(
            Args {
                globals: globals.clone(),
            },
            &mut out,
        )
        .expect("submit");

        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Form submitted successfully!\n"
        );
        let store = globals.open_store().expect("reopen");
        assert!(store.get(ACCOUNT_KEY).expect("get").is_some());
    }

    #[test]
    fn submit_without_data_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut out = Vec::new();
        let result = submit(
            Args {
                globals: GlobalArgs::new(dir.path().join("empty.json")),
            },
            &mut out,
        );
        assert!(result.is_err());
    }
}
