//! User notifications and confirmations.

use std::io::{self, Write};

use tracing::warn;

use crate::input::Input;

/// Blocking user interaction: an alert the user just sees, and a yes/no
/// question the operation waits on.
#[allow(async_fn_in_trait)]
pub trait Prompt {
    fn alert(&mut self, message: &str);

    async fn confirm(&mut self, question: &str) -> bool;
}

/// Terminal prompt. Alerts go to `out`; confirmations read the next input
/// line, and only `y` or `yes` count as consent.
pub struct TerminalPrompt<'a, W> {
    input: &'a mut Input,
    out: &'a mut W,
}

impl<'a, W: Write> TerminalPrompt<'a, W> {
    pub fn new(input: &'a mut Input, out: &'a mut W) -> Self {
        Self { input, out }
    }

    fn finish(&mut self, result: io::Result<()>) {
        if let Err(err) = result.and_then(|()| self.out.flush()) {
            warn!(%err, "failed to write prompt");
        }
    }
}

impl<W: Write> Prompt for TerminalPrompt<'_, W> {
    fn alert(&mut self, message: &str) {
        let result = writeln!(self.out, "{message}");
        self.finish(result);
    }

    async fn confirm(&mut self, question: &str) -> bool {
        let result = write!(self.out, "{question} [y/N] ");
        self.finish(result);
        match self.input.next_line().await {
            Some(answer) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }
}
