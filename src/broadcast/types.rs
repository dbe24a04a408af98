//! Types for the broadcast hub.

use crate::types::Recognition;
use serde::{Deserialize, Serialize};

/// Configuration for a subscriber's delivery queue.
#[derive(Clone, Debug)]
pub struct HubConfig {
    /// Max buffered recognitions before the subscriber is dropped.
    /// Default: 1000
    pub buffer_size: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self { buffer_size: 1000 }
    }
}

/// Why a subscriber was removed from the hub.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Delivery queue overflowed (slow consumer).
    BufferOverflow,
    /// Receiving side of the queue was dropped.
    Disconnected,
    /// Explicitly unsubscribed.
    Unsubscribed,
}

/// Unique identifier for a subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

/// Handle to receive pushed recognitions.
///
/// Yields only recognitions published after the subscriber attached;
/// there is no replay of earlier ones.
pub struct SubscriberHandle {
    pub id: SubscriberId,
    /// Channel to receive recognitions.
    pub receiver: crossbeam_channel::Receiver<Recognition>,
}

impl SubscriberHandle {
    /// Receive the next recognition (blocking).
    pub fn recv(&self) -> Result<Recognition, crossbeam_channel::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a recognition (non-blocking).
    pub fn try_recv(&self) -> Result<Recognition, crossbeam_channel::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Receive with timeout.
    pub fn recv_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Result<Recognition, crossbeam_channel::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}
