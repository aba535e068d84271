//! Item store sync: fetch the full item list and hand it to the screen.
//!
//! # Design
//! Sync cycles may overlap (timer tick vs. refresh after a mutation) and
//! their responses may come back in any order. Every cycle takes a ticket
//! from [`Sequencer`] before sending its request, and applies its result only
//! if it is newer than the last result applied. A cycle overtaken by a newer
//! request that is still in flight still renders. The ticket check and the
//! screen update happen under the screen lock, so the display never moves
//! back to an older snapshot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error};

use crate::adapter::Api;
use crate::screen::SharedScreen;

/// Monotonic ticket counter for sync cycles.
#[derive(Debug, Default)]
pub struct Sequencer {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl Sequencer {
    /// Take the next ticket. Tickets start at 1.
    pub fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Record `ticket` as applied if it is newer than every ticket applied
    /// so far. Returns false for a result that arrived out of order.
    pub fn claim(&self, ticket: u64) -> bool {
        self.applied.fetch_max(ticket, Ordering::SeqCst) < ticket
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The fetched list was rendered; holds the item count.
    Applied(usize),
    /// The fetch failed and the error view was rendered.
    Failed,
    /// A newer cycle was applied before this one finished; nothing rendered.
    Stale,
}

#[derive(Clone)]
pub struct ItemStoreSync {
    api: Api,
    screen: SharedScreen,
    sequencer: Arc<Sequencer>,
}

impl ItemStoreSync {
    pub fn new(api: Api, screen: SharedScreen) -> Self {
        Self {
            api,
            screen,
            sequencer: Arc::new(Sequencer::default()),
        }
    }

    /// Run one sync cycle.
    pub async fn load_items(&self) -> SyncOutcome {
        let ticket = self.sequencer.issue();
        let result = self.api.list_items().await;

        let mut screen = self.screen.lock().await;
        if !self.sequencer.claim(ticket) {
            debug!(ticket, "discarding stale item list");
            return SyncOutcome::Stale;
        }
        match result {
            Ok(items) => {
                debug!(ticket, count = items.len(), "rendering item list");
                screen.show_items(&items);
                SyncOutcome::Applied(items.len())
            }
            Err(err) => {
                error!(%err, "failed to load items");
                screen.show_load_error();
                SyncOutcome::Failed
            }
        }
    }

    /// Re-run [`Self::load_items`] every `period`, first tick one period from
    /// now. Each tick runs in its own task, so a slow backend does not delay
    /// later ticks. The loop runs until the handle is aborted.
    pub fn spawn_timer(&self, period: Duration) -> JoinHandle<()> {
        let sync = self.clone();
        tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                let cycle = sync.clone();
                tokio::spawn(async move {
                    cycle.load_items().await;
                });
            }
        })
    }
}
