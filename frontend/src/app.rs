//! Startup sequence, intent dispatch table and the input loop.
//!
//! Intents are dispatched one at a time and each is awaited to completion
//! before the next line is read, so user mutations never interleave. The
//! refresh timer runs in its own task and overlaps freely with them; the
//! sync sequencer keeps the display consistent.

use std::io::Write;
use std::time::Duration;

use tracing::info;

use crate::adapter::Api;
use crate::controller::MutationController;
use crate::form::ItemForm;
use crate::health::HealthMonitor;
use crate::input::Input;
use crate::intent::{Intent, HELP};
use crate::prompt::{Prompt, TerminalPrompt};
use crate::screen::SharedScreen;
use crate::sync::ItemStoreSync;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    health: HealthMonitor,
    sync: ItemStoreSync,
    controller: MutationController,
    form: ItemForm,
}

impl App {
    pub fn new(api: Api, screen: SharedScreen) -> Self {
        let sync = ItemStoreSync::new(api.clone(), screen.clone());
        Self {
            health: HealthMonitor::new(api.clone(), screen),
            controller: MutationController::new(api, sync.clone()),
            sync,
            form: ItemForm::default(),
        }
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    /// Probe the backend and load the list once.
    pub async fn start(&self) {
        self.health.check_health().await;
        self.sync.load_items().await;
    }

    pub async fn dispatch<P: Prompt>(&mut self, intent: Intent, prompt: &mut P) -> Flow {
        match intent {
            Intent::SetName(name) => self.form.name = name,
            Intent::SetDescription(description) => self.form.description = description,
            Intent::Submit => {
                self.controller.add_item(&mut self.form, prompt).await;
            }
            Intent::Add { name, description } => {
                self.form = ItemForm { name, description };
                self.controller.add_item(&mut self.form, prompt).await;
            }
            Intent::Delete(id) => {
                self.controller.delete_item(id, prompt).await;
            }
            Intent::Refresh => {
                self.sync.load_items().await;
            }
            Intent::Health => {
                self.health.check_health().await;
            }
            Intent::Help => prompt.alert(HELP),
            Intent::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Start up, then serve intents from `input` until `quit` or end of
    /// input, with a sync cycle every `refresh`.
    pub async fn run<W: Write>(mut self, mut input: Input, mut alerts: W, refresh: Duration) {
        self.start().await;
        let timer = self.sync.spawn_timer(refresh);
        info!(refresh_secs = refresh.as_secs(), "ready for commands");

        while let Some(line) = input.next_line().await {
            let mut prompt = TerminalPrompt::new(&mut input, &mut alerts);
            match Intent::parse(&line) {
                Ok(None) => {}
                Ok(Some(intent)) => {
                    if self.dispatch(intent, &mut prompt).await == Flow::Quit {
                        break;
                    }
                }
                Err(err) => prompt.alert(&format!("{err}; type `help` for commands")),
            }
        }

        timer.abort();
        info!("front-end stopped");
    }
}
