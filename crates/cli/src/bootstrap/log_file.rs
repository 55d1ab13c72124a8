use querytail_domain::config::TailConfig;
use querytail_infrastructure::tail::FileTailer;
use tracing::error;

/// Prepares the resolver log for tailing. Failure here is fatal.
pub async fn init_tailer(cfg: &TailConfig) -> anyhow::Result<FileTailer> {
    FileTailer::open(cfg).await.map_err(|e| {
        error!("Failed to prepare log file: {}", e);
        anyhow::anyhow!(e)
    })
}
