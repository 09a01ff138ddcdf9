//! Operator confirmation adapters

use std::io::{self, BufRead, Write};

use formprobe_application::Confirm;
use tracing::debug;

/// Blocks on stdin until the operator presses ENTER.
///
/// End of input counts as a refusal, so a closed stdin never starts a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl StdinConfirm {
    /// Creates a new stdin confirmation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        confirm_with(&mut stdin.lock(), &mut stdout.lock(), prompt)
    }
}

/// Writes `prompt` and waits for one line of input.
///
/// # Errors
///
/// Returns an error if writing the prompt or reading the answer fails.
pub fn confirm_with<R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<bool>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        // Keep the report on its own line after an unanswered prompt.
        writeln!(output)?;
        return Ok(false);
    }
    Ok(true)
}

/// Always proceeds; for unattended runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        debug!(prompt, "confirmation skipped");
        Ok(true)
    }
}
