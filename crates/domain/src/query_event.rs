use std::sync::Arc;

/// Sentinel domain used when a line carries no `query:` marker.
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// Record type assumed when a line carries no `type:` marker.
pub const DEFAULT_QUERY_TYPE: &str = "A";

/// Outcome reported for every event. The resolver outcome is not extracted
/// from the log line yet, so this is a constant.
pub const RESULT_RESOLVED: &str = "Resolved";

/// A DNS query observed in the resolver log.
///
/// Always fully populated: lines that cannot be parsed degrade to
/// [`UNKNOWN_DOMAIN`] / [`DEFAULT_QUERY_TYPE`] instead of being dropped.
/// Fields are `Arc<str>` so fan-out to many subscribers only bumps
/// reference counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEvent {
    /// Processing time, `HH:MM:SS` local time.
    pub timestamp: Arc<str>,

    /// Queried name, or [`UNKNOWN_DOMAIN`].
    pub domain: Arc<str>,

    /// Record type token as written in the log (e.g. "A", "AAAA").
    pub query_type: Arc<str>,

    /// Always [`RESULT_RESOLVED`].
    pub result: Arc<str>,
}

impl QueryEvent {
    pub fn new(
        timestamp: impl Into<Arc<str>>,
        domain: impl Into<Arc<str>>,
        query_type: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            domain: domain.into(),
            query_type: query_type.into(),
            result: Arc::from(RESULT_RESOLVED),
        }
    }
}
