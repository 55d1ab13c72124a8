pub mod runner;
pub mod tail_relay;

pub use runner::JobRunner;
pub use tail_relay::TailRelayJob;
