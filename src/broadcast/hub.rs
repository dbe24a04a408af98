//! Broadcast hub fanning out new recognitions to live subscribers.

use crate::types::Recognition;
use crossbeam_channel::{bounded, Sender};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

use super::types::{DropReason, HubConfig, SubscriberHandle, SubscriberId};

/// Internal per-subscriber state.
struct Subscriber {
    sender: Sender<Recognition>,
}

impl Subscriber {
    /// Try to deliver. `None` on success, the failure reason otherwise.
    fn try_send(&self, record: Recognition) -> Option<DropReason> {
        match self.sender.try_send(record) {
            Ok(()) => None,
            Err(crossbeam_channel::TrySendError::Full(_)) => Some(DropReason::BufferOverflow),
            Err(crossbeam_channel::TrySendError::Disconnected(_)) => {
                Some(DropReason::Disconnected)
            }
        }
    }
}

/// Single logical channel for newly created recognitions.
///
/// Each subscriber has an independent bounded queue; `publish` never
/// blocks, and a slow or disconnected subscriber is removed without
/// affecting delivery to the others.
pub struct BroadcastHub {
    /// Active subscribers by id.
    subscribers: RwLock<HashMap<SubscriberId, Subscriber>>,
    /// Counter for generating subscriber ids.
    next_id: AtomicU64,
}

impl BroadcastHub {
    /// Create a new hub with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Attach a new subscriber.
    ///
    /// The handle only ever yields recognitions published after this call
    /// returns; nothing historical is replayed.
    pub fn subscribe(&self, config: HubConfig) -> SubscriberHandle {
        let id = SubscriberId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let (sender, receiver) = bounded(config.buffer_size);

        self.subscribers.write().insert(id, Subscriber { sender });

        SubscriberHandle { id, receiver }
    }

    /// Detach a subscriber and release its queue. Idempotent.
    pub fn unsubscribe(&self, id: SubscriberId) {
        if self.subscribers.write().remove(&id).is_some() {
            warn!(subscriber = id.0, reason = ?DropReason::Unsubscribed, "subscriber removed");
        }
    }

    /// Number of currently attached subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Deliver a recognition to every attached subscriber.
    ///
    /// Non-blocking per subscriber (FIFO within each queue). Subscribers
    /// whose queue is full or gone are removed after the fan-out pass.
    pub fn publish(&self, record: &Recognition) {
        let mut to_remove = Vec::new();

        {
            let subs = self.subscribers.read();
            for (id, sub) in subs.iter() {
                if let Some(reason) = sub.try_send(record.clone()) {
                    to_remove.push((*id, reason));
                }
            }
        }

        if !to_remove.is_empty() {
            let mut subs = self.subscribers.write();
            for (id, reason) in to_remove {
                if subs.remove(&id).is_some() {
                    warn!(subscriber = id.0, reason = ?reason, "subscriber removed");
                }
            }
        }
    }
}

impl Default for BroadcastHub {
    fn default() -> Self {
        Self::new()
    }
}
