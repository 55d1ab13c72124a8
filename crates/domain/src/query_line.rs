//! Best-effort extraction of query events from resolver log lines.
//!
//! Example line:
//!
//! ```text
//! 2024-02-23T16:50:00Z INFO query: google.com type: A result: [1.2.3.4]
//! ```
//!
//! Only the `query:` and `type:` markers are understood. Everything else on
//! the line is ignored, and the timestamp written by the resolver is not
//! used: events carry the time they were processed.

use crate::query_event::{QueryEvent, DEFAULT_QUERY_TYPE, UNKNOWN_DOMAIN};
use chrono::{Local, NaiveTime};

/// Substring a line must contain to be handed to the parser.
pub const QUERY_TRIGGER: &str = "query";

const DOMAIN_MARKER: &str = "query:";
const TYPE_MARKER: &str = "type:";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Cheap pre-filter applied before parsing.
///
/// Plain substring containment, so it admits false positives such as
/// `"no query here"`. Those still parse, into sentinel values.
pub fn is_query_line(line: &str) -> bool {
    line.contains(QUERY_TRIGGER)
}

/// Parses a line, stamping it with the current local time.
pub fn parse_query_line(line: &str) -> QueryEvent {
    parse_query_line_at(line, Local::now().time())
}

/// Parses a line, stamping it with `time`.
///
/// Never fails. A marker in last position (no following token) leaves the
/// field at its default; if a marker repeats, the last occurrence wins.
pub fn parse_query_line_at(line: &str, time: NaiveTime) -> QueryEvent {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let mut domain = UNKNOWN_DOMAIN;
    let mut query_type = DEFAULT_QUERY_TYPE;

    for pair in tokens.windows(2) {
        match pair[0] {
            DOMAIN_MARKER => domain = pair[1],
            TYPE_MARKER => query_type = pair[1],
            _ => {}
        }
    }

    QueryEvent::new(time.format(TIME_FORMAT).to_string(), domain, query_type)
}
