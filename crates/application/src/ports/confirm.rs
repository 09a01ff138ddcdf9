//! Confirm-to-proceed port

use std::io;

/// Asks the operator whether to go ahead before any request is sent.
///
/// The CLI blocks on stdin; automated runs plug in an implementation that
/// always answers yes.
pub trait Confirm {
    /// Shows `prompt` and returns whether to proceed.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator could not be asked.
    fn confirm(&self, prompt: &str) -> io::Result<bool>;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> io::Result<bool>,
{
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        self(prompt)
    }
}
