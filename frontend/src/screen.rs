//! The single render target.
//!
//! `Screen` is the only writer of the output sink. Other components hand it
//! items, a load failure, or a connectivity state; it rebuilds the matching
//! region in full and writes it out in the configured format.

use std::io::{self, Write};
use std::sync::Arc;

use clap::ValueEnum;
use items_core::{render, Connectivity, Item, View};
use tokio::sync::Mutex;
use tracing::warn;

/// How the screen writes its regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for a terminal.
    #[default]
    Text,
    /// HTML fragments for the `status` and `itemsList` elements.
    Html,
}

pub type SharedScreen = Arc<Mutex<Screen>>;

pub struct Screen {
    format: OutputFormat,
    status: Connectivity,
    items: Option<View>,
    out: Box<dyn Write + Send>,
}

impl Screen {
    pub fn new(format: OutputFormat, out: Box<dyn Write + Send>) -> Self {
        Self {
            format,
            status: Connectivity::default(),
            items: None,
            out,
        }
    }

    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, Box::new(io::stdout()))
    }

    pub fn into_shared(self) -> SharedScreen {
        Arc::new(Mutex::new(self))
    }

    /// Replace the item region with a fresh render of `items`.
    pub fn show_items(&mut self, items: &[Item]) {
        self.replace_items(render(items));
    }

    /// Replace the item region with the static load error.
    pub fn show_load_error(&mut self) {
        self.replace_items(View::LoadFailed);
    }

    pub fn show_status(&mut self, state: Connectivity) {
        self.status = state;
        let result = match self.format {
            OutputFormat::Text => writeln!(self.out, "status: {state}"),
            OutputFormat::Html => writeln!(self.out, "{}", state.to_html()),
        };
        self.finish(result);
    }

    pub fn status(&self) -> Connectivity {
        self.status
    }

    /// The last rendered item region, if anything has been rendered yet.
    pub fn items(&self) -> Option<&View> {
        self.items.as_ref()
    }

    fn replace_items(&mut self, view: View) {
        let result = match self.format {
            OutputFormat::Text => write!(self.out, "items:\n{view}"),
            OutputFormat::Html => writeln!(self.out, r#"<div id="itemsList">{}</div>"#, view.to_html()),
        };
        self.items = Some(view);
        self.finish(result);
    }

    fn finish(&mut self, result: io::Result<()>) {
        if let Err(err) = result.and_then(|()| self.out.flush()) {
            warn!(%err, "failed to write to the screen");
        }
    }
}
