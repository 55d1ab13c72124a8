use crate::ports::EventPublisher;
use querytail_domain::{is_query_line, parse_query_line, QueryEvent};
use std::sync::Arc;
use tracing::trace;

/// Turns one raw log line into at most one published event.
pub struct RelayQueryLineUseCase {
    publisher: Arc<dyn EventPublisher>,
}

impl RelayQueryLineUseCase {
    pub fn new(publisher: Arc<dyn EventPublisher>) -> Self {
        Self { publisher }
    }

    /// Lines without the trigger substring are discarded before parsing.
    /// Every other line yields exactly one event, which is published and
    /// returned.
    pub fn execute(&self, line: &str) -> Option<QueryEvent> {
        if !is_query_line(line) {
            trace!(line, "Skipping non-query line");
            return None;
        }

        let event = parse_query_line(line);
        trace!(domain = %event.domain, query_type = %event.query_type, "Relaying query event");
        self.publisher.publish(event.clone());
        Some(event)
    }
}
