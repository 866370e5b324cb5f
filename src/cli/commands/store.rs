use clap::{Arg, Command};

pub const ARG_STORE: &str = "store";
pub const ARG_KEY_PREFIX: &str = "key-prefix";
pub const DEFAULT_STORE_PATH: &str = "formwizard.json";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_STORE)
                .short('s')
                .long("store")
                .help("JSON file holding the step drafts")
                .default_value(DEFAULT_STORE_PATH)
                .env("FORMWIZARD_STORE")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new(ARG_KEY_PREFIX)
                .long("key-prefix")
                .help("Prefix applied to every storage key")
                .default_value("")
                .env("FORMWIZARD_KEY_PREFIX")
                .global(true),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn command() -> Command {
        with_args(Command::new("formwizard"))
    }

    #[test]
    fn defaults_apply_without_env() {
        temp_env::with_vars(
            [
                ("FORMWIZARD_STORE", None::<&str>),
                ("FORMWIZARD_KEY_PREFIX", None::<&str>),
            ],
            || {
                let matches = command().get_matches_from(vec!["formwizard"]);
                assert_eq!(
                    matches.get_one::<PathBuf>(ARG_STORE),
                    Some(&PathBuf::from(DEFAULT_STORE_PATH))
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_KEY_PREFIX).map(String::as_str),
                    Some("")
                );
            },
        );
    }

    #[test]
    fn env_overrides_defaults() {
        temp_env::with_vars(
            [
                ("FORMWIZARD_STORE", Some("/tmp/wizard.json")),
                ("FORMWIZARD_KEY_PREFIX", Some("signup:")),
            ],
            || {
                let matches = command().get_matches_from(vec!["formwizard"]);
                assert_eq!(
                    matches.get_one::<PathBuf>(ARG_STORE),
                    Some(&PathBuf::from("/tmp/wizard.json"))
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_KEY_PREFIX).map(String::as_str),
                    Some("signup:")
                );
            },
        );
    }

    #[test]
    fn flags_override_env() {
        temp_env::with_vars([("FORMWIZARD_STORE", Some("/tmp/env.json"))], || {
            let matches =
                command().get_matches_from(vec!["formwizard", "--store", "/tmp/flag.json"]);
            assert_eq!(
                matches.get_one::<PathBuf>(ARG_STORE),
                Some(&PathBuf::from("/tmp/flag.json"))
            );
        });
    }
}
