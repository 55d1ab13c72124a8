use querytail_application::services::BroadcastHub;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub hub: BroadcastHub,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(hub: BroadcastHub) -> Self {
        Self {
            hub,
            started_at: Instant::now(),
        }
    }
}
