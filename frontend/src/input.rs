//! Line input for the event loop.
//!
//! Standard input is read on a dedicated OS thread and forwarded over a
//! channel, so a pending read never holds up the runtime at shutdown.

use std::io::{self, BufRead};

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tracing::{debug, warn};

pub struct Input {
    lines: UnboundedReceiver<String>,
}

impl Input {
    pub fn stdin() -> io::Result<Self> {
        let (tx, rx) = unbounded_channel();
        std::thread::Builder::new()
            .name("stdin-reader".to_string())
            .spawn(move || {
                let mut stdin = io::stdin().lock();
                let mut buf = Vec::new();
                loop {
                    buf.clear();
                    match stdin.read_until(b'\n', &mut buf) {
                        Ok(0) => break,
                        Ok(_) => {}
                        Err(err) => {
                            warn!(%err, "failed to read stdin, ending input");
                            break;
                        }
                    }
                    if tx.send(decode_line(&buf)).is_err() {
                        break;
                    }
                }
                debug!("stdin closed");
            })?;
        Ok(Self { lines: rx })
    }

    /// Input that yields `lines` and then reports end of input.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (tx, rx) = unbounded_channel();
        for line in lines {
            let _ = tx.send(line.into());
        }
        Self { lines: rx }
    }

    /// Next line, or `None` once the input is exhausted.
    pub async fn next_line(&mut self) -> Option<String> {
        self.lines.recv().await
    }
}

/// One raw input line without its line ending. Invalid UTF-8 is replaced
/// rather than ending the session.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    match std::str::from_utf8(raw) {
        Ok(line) => line.to_string(),
        Err(err) => {
            warn!(%err, "input line is not valid UTF-8");
            String::from_utf8_lossy(raw).into_owned()
        }
    }
}
