use crate::cli::globals::GlobalArgs;
use crate::wizard::clear_drafts;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

/// Remove every wizard key from the store.
/// # Errors
/// Returns an error if the store cannot be opened or rewritten.
pub fn execute<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let mut store = args.globals.open_store()?;
    clear_drafts(&mut store).context("failed to clear drafts")?;
    info!(path = %args.globals.store_path.display(), "drafts cleared");
    writeln!(out, "Cleared wizard drafts")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::KeyValueStore;
    use crate::wizard::storage::{ACCOUNT_KEY, PAYMENT_KEY};

    #[test]
    fn clear_removes_wizard_keys_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let globals = GlobalArgs::new(dir.path().join("drafts.json"));
        {
            let mut store = globals.open_store().expect("open");
            store.set(ACCOUNT_KEY, "{}").expect("seed");
            store.set(PAYMENT_KEY, "{}").expect("seed");
            store.set("theme", "dark").expect("seed");
        }

        let mut out = Vec::new();
        execute(
            Args {
                globals: globals.clone(),
            },
            &mut out,
        )
        .expect("clear");

        let store = globals.open_store().expect("reopen");
        assert!(store.get(ACCOUNT_KEY).expect("get").is_none());
        assert!(store.get(PAYMENT_KEY).expect("get").is_none());
        assert_eq!(store.get("theme").expect("get").as_deref(), Some("dark"));
        assert_eq!(String::from_utf8(out).expect("utf8"), "Cleared wizard drafts\n");
    }

    #[test]
    fn clear_on_missing_file_is_fine() {
        let dir = tempfile::tempdir().expect("tempdir");
        let globals = GlobalArgs::new(dir.path().join("none.json"));
        let mut out = Vec::new();
        assert!(execute(Args { globals }, &mut out).is_ok());
    }
}
