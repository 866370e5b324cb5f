pub mod logging;
pub mod store;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const CMD_SET: &str = "set";
pub const CMD_NEXT: &str = "next";
pub const CMD_REVIEW: &str = "review";
pub const CMD_SUBMIT: &str = "submit";
pub const CMD_CLEAR: &str = "clear";

pub const ARG_STEP: &str = "step";
pub const ARG_FIELD: &str = "field";
pub const ARG_VALUE: &str = "value";

pub const STEPS: [&str; 3] = ["account", "personal", "payment"];

fn step_arg() -> Arg {
    Arg::new(ARG_STEP)
        .help("Wizard step")
        .required(true)
        .value_parser(STEPS)
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("formwizard")
        .about("Multi-step registration wizard")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(CMD_SET)
                .about("Edit one field of a step draft")
                .arg(step_arg())
                .arg(
                    Arg::new(ARG_FIELD)
                        .help("Field wire name, e.g. firstName or cardNumber")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_VALUE)
                        .help("New value; sanitized the same way the form does")
                        .required(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new(CMD_NEXT)
                .about("Validate a step and report where it would navigate")
                .arg(step_arg()),
        )
        .subcommand(Command::new(CMD_REVIEW).about("Show the confirmation summary"))
        .subcommand(Command::new(CMD_SUBMIT).about("Submit the confirmed record"))
        .subcommand(Command::new(CMD_CLEAR).about("Remove every stored draft"));

    let command = store::with_args(command);
    logging::with_args(command)
}
