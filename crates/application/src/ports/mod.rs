pub mod event_publisher;
pub mod line_source;

pub use event_publisher::EventPublisher;
pub use line_source::LineSource;
