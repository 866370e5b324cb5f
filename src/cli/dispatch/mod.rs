use crate::cli::actions::{
    Action, clear,
    edit::{NextArgs, SetArgs, Step},
    review,
};
use crate::cli::commands::{self, store};
use crate::cli::globals::GlobalArgs;
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

fn globals(matches: &clap::ArgMatches) -> Result<GlobalArgs> {
    let store_path = matches
        .get_one::<PathBuf>(store::ARG_STORE)
        .cloned()
        .context("missing required argument: --store")?;
    let mut globals = GlobalArgs::new(store_path);
    if let Some(prefix) = matches.get_one::<String>(store::ARG_KEY_PREFIX) {
        globals.set_key_prefix(prefix.as_str());
    }
    Ok(globals)
}

fn step(matches: &clap::ArgMatches) -> Result<Step> {
    let name = matches
        .get_one::<String>(commands::ARG_STEP)
        .context("missing required argument: <step>")?;
    Step::parse(name)
}

fn text(matches: &clap::ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: <{name}>"))
}

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let Some((name, sub)) = matches.subcommand() else {
        bail!("missing subcommand");
    };
    let globals = globals(sub)?;

    let action = match name {
        commands::CMD_SET => Action::Set(SetArgs {
            globals,
            step: step(sub)?,
            field: text(sub, commands::ARG_FIELD)?,
            value: text(sub, commands::ARG_VALUE)?,
        }),
        commands::CMD_NEXT => Action::Next(NextArgs {
            globals,
            step: step(sub)?,
        }),
        commands::CMD_REVIEW => Action::Review(review::Args { globals }),
        commands::CMD_SUBMIT => Action::Submit(review::Args { globals }),
        commands::CMD_CLEAR => Action::Clear(clear::Args { globals }),
        other => bail!("unknown subcommand: {other}"),
    };

    Ok(action)
}
