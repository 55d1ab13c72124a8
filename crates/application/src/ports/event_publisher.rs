use querytail_domain::QueryEvent;

/// Sink for parsed query events.
///
/// `publish` must not block: implementations hand the event off and
/// return immediately.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: QueryEvent);
}
