//! Interactive front-end for the items service.
//!
//! # Overview
//! Hosts `items-core`: executes its requests over HTTP, keeps the rendered
//! item list in step with the backend (once at startup, on a fixed timer,
//! and after every successful mutation), and turns input lines into create
//! and delete operations.
//!
//! # Design
//! - `Screen` is the only render target; other components reach it through
//!   `show_items`, `show_load_error` and `show_status`.
//! - Sync cycles carry sequence tickets, so a slow response from an older
//!   cycle can never overwrite a newer list.
//! - Intents are routed through one dispatch table and run to completion
//!   one at a time.

pub mod adapter;
pub mod app;
pub mod config;
pub mod controller;
pub mod form;
pub mod health;
pub mod input;
pub mod intent;
pub mod prompt;
pub mod screen;
pub mod sync;

#[cfg(test)]
mod testing;

pub use adapter::{Api, UreqTransport};
pub use app::{App, Flow};
pub use config::Config;
pub use controller::{MutationController, MutationOutcome};
pub use form::ItemForm;
pub use health::HealthMonitor;
pub use input::Input;
pub use intent::{Intent, IntentError};
pub use prompt::{Prompt, TerminalPrompt};
pub use screen::{OutputFormat, Screen, SharedScreen};
pub use sync::{ItemStoreSync, Sequencer, SyncOutcome};
