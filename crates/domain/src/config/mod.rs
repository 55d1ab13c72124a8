//! Configuration module for querytail
//!
//! - `root`: Main configuration, file loading and CLI overrides
//! - `server`: Web server binding and UI directory
//! - `tail`: Log file location and retry intervals
//! - `hub`: Subscriber queue sizing and overflow policy
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod hub;
pub mod logging;
pub mod root;
pub mod server;
pub mod tail;

pub use errors::ConfigError;
pub use hub::{HubConfig, OverflowPolicy};
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use tail::TailConfig;
