use querytail_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over `logging.level`.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.logging.level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(true)
        .init();

    info!(
        level = %config.logging.level,
        log_file = %config.tail.log_path.display(),
        "Logging initialized"
    );
}

/// Directives for a configured level. hyper stays at `info` or quieter so
/// `trace` shows the relay, not every socket poll.
fn default_directives(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" => format!("{level},hyper=info,hyper_util=info"),
        _ => level,
    }
}
