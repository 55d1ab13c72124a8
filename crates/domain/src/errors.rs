use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Log file unavailable: {path}: {reason}")]
    LogFileUnavailable { path: String, reason: String },

    #[error("Broadcast hub is not running")]
    HubUnavailable,
}
