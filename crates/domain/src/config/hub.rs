use serde::{Deserialize, Serialize};

/// What the hub does when a subscriber's outbound queue is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Remove the subscriber; its connection is closed.
    #[default]
    Disconnect,
    /// Skip this event for that subscriber only.
    DropEvent,
}

impl OverflowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Disconnect => "disconnect",
            OverflowPolicy::DropEvent => "drop_event",
        }
    }
}

/// Broadcast hub configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HubConfig {
    /// Events buffered per subscriber before the overflow policy applies
    #[serde(default = "default_queue_capacity")]
    pub subscriber_queue_capacity: usize,

    #[serde(default)]
    pub overflow_policy: OverflowPolicy,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            subscriber_queue_capacity: default_queue_capacity(),
            overflow_policy: OverflowPolicy::default(),
        }
    }
}

fn default_queue_capacity() -> usize {
    256
}
