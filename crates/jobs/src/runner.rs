use crate::TailRelayJob;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_tail_relay(TailRelayJob::new(Box::new(tailer), relay))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    tail_relay: Option<TailRelayJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self { tail_relay: None }
    }

    pub fn with_tail_relay(mut self, job: TailRelayJob) -> Self {
        self.tail_relay = Some(job);
        self
    }

    /// Start all registered background jobs. The returned handles finish
    /// once each job observes its cancellation token.
    pub async fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");

        let mut handles = Vec::new();

        if let Some(job) = self.tail_relay {
            handles.push(job.start());
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
