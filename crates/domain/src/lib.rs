//! querytail Domain Layer
pub mod config;
pub mod errors;
pub mod query_event;
pub mod query_line;
pub mod subscriber;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use query_event::{QueryEvent, DEFAULT_QUERY_TYPE, RESULT_RESOLVED, UNKNOWN_DOMAIN};
pub use query_line::{is_query_line, parse_query_line, parse_query_line_at, QUERY_TRIGGER};
pub use subscriber::SubscriberId;
