use crate::cli::actions::{Action, clear, edit, review};
use anyhow::Result;
use std::io::Write;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub fn execute<W: Write>(action: Action, out: &mut W) -> Result<()> {
    match action {
        Action::Set(args) => edit::set(args, out),
        Action::Next(args) => edit::next(args, out),
        Action::Review(args) => review::review(args, out),
        Action::Submit(args) => review::submit(args, out),
        Action::Clear(args) => clear::execute(args, out),
    }
}
