pub mod query_event;
pub mod stats;

pub use query_event::QueryEventMessage;
pub use stats::StatsResponse;
