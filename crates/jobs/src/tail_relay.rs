use querytail_application::ports::LineSource;
use querytail_application::use_cases::RelayQueryLineUseCase;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Pumps lines from a [`LineSource`] through the relay use case, one at a
/// time and in order, until cancelled.
pub struct TailRelayJob {
    source: Box<dyn LineSource>,
    relay: Arc<RelayQueryLineUseCase>,
    shutdown: CancellationToken,
}

impl TailRelayJob {
    pub fn new(source: Box<dyn LineSource>, relay: Arc<RelayQueryLineUseCase>) -> Self {
        Self {
            source,
            relay,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(mut self) -> JoinHandle<()> {
        info!("Starting tail relay job");

        tokio::spawn(async move {
            let mut relayed: u64 = 0;
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!(relayed, "TailRelayJob: shutting down");
                        break;
                    }
                    line = self.source.next_line() => {
                        if let Some(event) = self.relay.execute(&line) {
                            relayed += 1;
                            debug!(domain = %event.domain, query_type = %event.query_type, "Query relayed");
                        }
                    }
                }
            }
        })
    }
}
