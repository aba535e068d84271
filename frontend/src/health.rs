//! Point-in-time backend reachability probe.

use items_core::Connectivity;
use tracing::{info, warn};

use crate::adapter::Api;
use crate::screen::SharedScreen;

#[derive(Clone)]
pub struct HealthMonitor {
    api: Api,
    screen: SharedScreen,
}

impl HealthMonitor {
    pub fn new(api: Api, screen: SharedScreen) -> Self {
        Self { api, screen }
    }

    /// Probe the health endpoint once and update the indicator. No retry.
    pub async fn check_health(&self) -> Connectivity {
        let outcome = self.api.health().await;
        match &outcome {
            Ok(()) => info!("backend reachable"),
            Err(err) => warn!(%err, "health check failed"),
        }
        let state = Connectivity::from_probe(&outcome);
        self.screen.lock().await.show_status(state);
        state
    }
}
