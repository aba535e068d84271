//! Backend connectivity indicator state.

use std::fmt;

/// Outcome of the most recent health probe. No history is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// No probe has completed yet.
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

impl Connectivity {
    pub fn from_probe<E>(outcome: &Result<(), E>) -> Self {
        match outcome {
            Ok(()) => Connectivity::Connected,
            Err(_) => Connectivity::Disconnected,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Connectivity::Unknown => "Checking backend connection...",
            Connectivity::Connected => "✓ Connected to backend",
            Connectivity::Disconnected => "✗ Backend connection failed",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Connectivity::Unknown => "status-indicator",
            Connectivity::Connected => "status-indicator connected",
            Connectivity::Disconnected => "status-indicator disconnected",
        }
    }

    /// Markup for the `status` element.
    pub fn to_html(self) -> String {
        format!(r#"<div id="status" class="{}">{}</div>"#, self.css_class(), self.label())
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
