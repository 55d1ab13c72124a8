use querytail_domain::QueryEvent;
use serde::Serialize;
use std::sync::Arc;

/// One WebSocket text frame: `{"time", "domain", "type", "result"}`.
#[derive(Serialize, Debug, Clone)]
pub struct QueryEventMessage {
    pub time: Arc<str>,
    pub domain: Arc<str>,
    #[serde(rename = "type")]
    pub record_type: Arc<str>,
    pub result: Arc<str>,
}

impl From<&QueryEvent> for QueryEventMessage {
    fn from(event: &QueryEvent) -> Self {
        Self {
            time: Arc::clone(&event.timestamp),
            domain: Arc::clone(&event.domain),
            record_type: Arc::clone(&event.query_type),
            result: Arc::clone(&event.result),
        }
    }
}
