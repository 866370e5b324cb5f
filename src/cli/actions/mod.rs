pub mod clear;
pub mod edit;
pub mod review;

// Internal "interpreter" for `Action`.
// The match lives in `run` so this module only declares the variants.
mod run;

use std::io::{self, Write};

#[derive(Debug)]
pub enum Action {
    Set(edit::SetArgs),
    Next(edit::NextArgs),
    Review(review::Args),
    Submit(review::Args),
    Clear(clear::Args),
}

impl Action {
    /// Execute the action, reporting to stdout.
    /// # Errors
    /// Returns an error if the action fails.
    pub fn execute(self) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute_to(&mut out)
    }

    /// Execute the action, reporting to `out`.
    /// # Errors
    /// Returns an error if the action fails or `out` cannot be written.
    pub fn execute_to<W: Write>(self, out: &mut W) -> anyhow::Result<()> {
        run::execute(self, out)
    }
}
