use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Log tailing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TailConfig {
    /// Resolver log file to follow. Created empty if missing.
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,

    /// Delay before retrying a read that found no complete line
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Delay before retrying a failed open
    #[serde(default = "default_reopen_interval_ms")]
    pub reopen_interval_ms: u64,

    /// Reattach when the file is replaced or truncated.
    /// When false the tailer stays on the first handle it opened forever.
    #[serde(default = "default_true")]
    pub follow_rotation: bool,
}

impl TailConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn reopen_interval(&self) -> Duration {
        Duration::from_millis(self.reopen_interval_ms)
    }
}

impl Default for TailConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            poll_interval_ms: default_poll_interval_ms(),
            reopen_interval_ms: default_reopen_interval_ms(),
            follow_rotation: true,
        }
    }
}

fn default_log_path() -> PathBuf {
    PathBuf::from("mosdns.log")
}

fn default_poll_interval_ms() -> u64 {
    500
}

fn default_reopen_interval_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}
