use querytail_application::services::{BroadcastHub, HubRunner};
use querytail_application::use_cases::RelayQueryLineUseCase;
use querytail_domain::Config;
use std::sync::Arc;

/// The process-wide hub and everything that publishes into it.
pub struct Services {
    pub hub: BroadcastHub,
    pub hub_runner: HubRunner,
    pub relay: Arc<RelayQueryLineUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let (hub, hub_runner) = BroadcastHub::new(&config.hub);
        let relay = Arc::new(RelayQueryLineUseCase::new(Arc::new(hub.clone())));
        Self {
            hub,
            hub_runner,
            relay,
        }
    }
}
