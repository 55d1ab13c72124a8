use crate::ports::EventPublisher;
use querytail_domain::config::{HubConfig, OverflowPolicy};
use querytail_domain::{DomainError, QueryEvent, SubscriberId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

enum HubCommand {
    Subscribe {
        id: SubscriberId,
        sender: mpsc::Sender<QueryEvent>,
    },
    Unsubscribe {
        id: SubscriberId,
    },
    Publish(QueryEvent),
    Count(oneshot::Sender<usize>),
}

/// A registered viewer: its handle plus the receiving half of its
/// bounded outbound queue.
///
/// When `events` yields `None` the hub has dropped this subscriber
/// (queue overflow under [`OverflowPolicy::Disconnect`], or hub shutdown).
pub struct Subscription {
    pub id: SubscriberId,
    pub events: mpsc::Receiver<QueryEvent>,
}

/// Handle to the process-wide fan-out hub.
///
/// The subscriber set is owned by a single [`HubRunner`] task; every
/// subscribe, unsubscribe and publish is a message on one FIFO channel, so
/// mutations and deliveries are serialized without a lock. A subscriber
/// registered after publish N and before publish N+1 receives N+1 onwards,
/// and each subscriber sees events in publish order.
///
/// Delivery never blocks: each subscriber has its own bounded queue, filled
/// with `try_send`. A slow viewer only affects itself.
///
/// ## Example
///
/// ```rust,no_run
/// use querytail_application::services::BroadcastHub;
/// use querytail_domain::config::HubConfig;
/// use querytail_domain::QueryEvent;
///
/// # async fn demo() {
/// let (hub, runner) = BroadcastHub::new(&HubConfig::default());
/// runner.start();
///
/// let mut subscription = hub.connect();
/// hub.publish(QueryEvent::new("16:50:00", "example.com", "A"));
///
/// let event = subscription.events.recv().await;
/// # }
/// ```
#[derive(Clone)]
pub struct BroadcastHub {
    commands: mpsc::UnboundedSender<HubCommand>,
    next_id: Arc<AtomicU64>,
    queue_capacity: usize,
}

impl BroadcastHub {
    /// Creates the hub handle and the runner that owns the subscriber set.
    /// Nothing is delivered until the runner is started.
    pub fn new(config: &HubConfig) -> (Self, HubRunner) {
        let (tx, rx) = mpsc::unbounded_channel();
        let hub = Self {
            commands: tx,
            next_id: Arc::new(AtomicU64::new(1)),
            queue_capacity: config.subscriber_queue_capacity.max(1),
        };
        let runner = HubRunner {
            commands: rx,
            subscribers: HashMap::new(),
            overflow_policy: config.overflow_policy,
            shutdown: CancellationToken::new(),
        };
        (hub, runner)
    }

    /// Allocates a fresh handle and queue, and registers them.
    pub fn connect(&self) -> Subscription {
        let id = SubscriberId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let (sender, events) = mpsc::channel(self.queue_capacity);
        self.subscribe(id, sender);
        Subscription { id, events }
    }

    /// Registers `sender` under `id`.
    ///
    /// Idempotent: if `id` is already registered the existing registration
    /// is kept and `sender` is dropped.
    pub fn subscribe(&self, id: SubscriberId, sender: mpsc::Sender<QueryEvent>) {
        self.send_command(HubCommand::Subscribe { id, sender });
    }

    /// Removes `id`. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.send_command(HubCommand::Unsubscribe { id });
    }

    /// Queues `event` for delivery to every current subscriber.
    pub fn publish(&self, event: QueryEvent) {
        self.send_command(HubCommand::Publish(event));
    }

    /// Number of registered subscribers, as seen after every command sent
    /// before this call has been applied.
    pub async fn subscriber_count(&self) -> Result<usize, DomainError> {
        let (tx, rx) = oneshot::channel();
        if self.commands.send(HubCommand::Count(tx)).is_err() {
            return Err(DomainError::HubUnavailable);
        }
        rx.await.map_err(|_| DomainError::HubUnavailable)
    }

    pub fn is_running(&self) -> bool {
        !self.commands.is_closed()
    }

    fn send_command(&self, command: HubCommand) {
        if self.commands.send(command).is_err() {
            debug!("Broadcast hub stopped, command dropped");
        }
    }
}

impl EventPublisher for BroadcastHub {
    fn publish(&self, event: QueryEvent) {
        self.send_command(HubCommand::Publish(event));
    }
}

impl std::fmt::Debug for BroadcastHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastHub")
            .field("running", &self.is_running())
            .field("queue_capacity", &self.queue_capacity)
            .finish()
    }
}

/// Owner of the subscriber set. Runs until cancelled or until every
/// [`BroadcastHub`] handle has been dropped.
pub struct HubRunner {
    commands: mpsc::UnboundedReceiver<HubCommand>,
    subscribers: HashMap<SubscriberId, mpsc::Sender<QueryEvent>>,
    overflow_policy: OverflowPolicy,
    shutdown: CancellationToken,
}

impl HubRunner {
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    pub async fn run(mut self) {
        info!(
            overflow_policy = self.overflow_policy.as_str(),
            "Broadcast hub started"
        );

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("BroadcastHub: shutting down");
                    break;
                }
                command = self.commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => {
                        debug!("All hub handles dropped");
                        break;
                    }
                }
            }
        }

        // Dropping the senders ends every subscriber's event stream.
        self.subscribers.clear();
    }

    fn handle(&mut self, command: HubCommand) {
        match command {
            HubCommand::Subscribe { id, sender } => match self.subscribers.entry(id) {
                Entry::Occupied(_) => {
                    debug!(subscriber = %id, "Already subscribed, keeping existing registration");
                }
                Entry::Vacant(slot) => {
                    slot.insert(sender);
                    info!(
                        subscriber = %id,
                        subscribers = self.subscribers.len(),
                        "Subscriber registered"
                    );
                }
            },
            HubCommand::Unsubscribe { id } => {
                if self.subscribers.remove(&id).is_some() {
                    info!(
                        subscriber = %id,
                        subscribers = self.subscribers.len(),
                        "Subscriber removed"
                    );
                }
            }
            HubCommand::Publish(event) => self.deliver(event),
            HubCommand::Count(reply) => {
                let _ = reply.send(self.subscribers.len());
            }
        }
    }

    fn deliver(&mut self, event: QueryEvent) {
        let mut dropped = Vec::new();

        for (id, sender) in &self.subscribers {
            match sender.try_send(event.clone()) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => match self.overflow_policy {
                    OverflowPolicy::Disconnect => {
                        info!(subscriber = %id, "Subscriber queue full, disconnecting");
                        dropped.push(*id);
                    }
                    OverflowPolicy::DropEvent => {
                        debug!(subscriber = %id, domain = %event.domain, "Subscriber queue full, event skipped");
                    }
                },
                Err(TrySendError::Closed(_)) => {
                    info!(subscriber = %id, "Subscriber gone, removing");
                    dropped.push(*id);
                }
            }
        }

        for id in dropped {
            self.subscribers.remove(&id);
        }
    }
}
