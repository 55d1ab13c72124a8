use querytail_application::ports::EventPublisher;
use querytail_domain::QueryEvent;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock EventPublisher
// ============================================================================

#[derive(Clone, Default)]
pub struct MockEventPublisher {
    published: Arc<Mutex<Vec<QueryEvent>>>,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<QueryEvent> {
        self.published.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.published.lock().unwrap().len()
    }
}

impl EventPublisher for MockEventPublisher {
    fn publish(&self, event: QueryEvent) {
        self.published.lock().unwrap().push(event);
    }
}
