pub mod health;
pub mod stats;
pub mod ws;

pub use health::health_check;
pub use stats::get_stats;
pub use ws::{query_stream, serve_subscriber};
