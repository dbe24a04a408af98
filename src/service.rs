//! Recognition service: creation mutation and read queries.

use crate::broadcast::{BroadcastHub, HubConfig, SubscriberHandle};
use crate::directory::Directory;
use crate::error::{EngineError, Result};
use crate::policy;
use crate::store::RecognitionStore;
use crate::types::{
    Caller, CallerId, Recognition, RecognitionDraft, RecognitionId, Timestamp, Visibility,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Orchestrates recognition creation and visibility-filtered reads.
///
/// The service is the only writer to the store. Creation is serialized so
/// that id assignment, the `created_at` stamp, the append, and the publish
/// form one total order: a subscriber receiving a push can immediately
/// issue a query and see the pushed record.
pub struct RecognitionService {
    directory: Arc<dyn Directory>,
    store: Arc<RecognitionStore>,
    hub: Arc<BroadcastHub>,

    /// Next record id. Never derived from the clock, so records created
    /// within the same tick still get distinct ids.
    next_id: AtomicU64,

    /// Last `created_at` handed out; also serializes the creation path.
    clock: Mutex<Timestamp>,
}

impl RecognitionService {
    /// Create a service over the given collaborators.
    ///
    /// Id assignment starts above the highest id already in the store, so
    /// pre-seeded records never collide with created ones.
    pub fn new(
        directory: Arc<dyn Directory>,
        store: Arc<RecognitionStore>,
        hub: Arc<BroadcastHub>,
    ) -> Self {
        let next_id = store.max_id().map_or(1, |max| max + 1);
        Self {
            directory,
            store,
            hub,
            next_id: AtomicU64::new(next_id),
            clock: Mutex::new(Timestamp(0)),
        }
    }

    /// Recognitions the viewer may see in the general listing, in store
    /// insertion order.
    pub fn list_visible(&self, viewer_id: &CallerId) -> Result<Vec<Recognition>> {
        let viewer = self.resolve(viewer_id)?;
        Ok(self
            .store
            .list_all()
            .into_iter()
            .filter(|r| policy::general(&viewer, r))
            .collect())
    }

    /// Recognitions addressed to the viewer, in store insertion order.
    pub fn list_mine(&self, viewer_id: &CallerId) -> Result<Vec<Recognition>> {
        let viewer = self.resolve(viewer_id)?;
        Ok(self
            .store
            .list_all()
            .into_iter()
            .filter(|r| policy::mine(&viewer, r))
            .collect())
    }

    /// Create a recognition, append it to the store, and push it to every
    /// live subscriber.
    ///
    /// Validation happens before any write: an unknown sender or an
    /// invalid visibility leaves the store untouched. The recipient is
    /// not checked for existence, and empty `message`/`emoji` are
    /// accepted.
    pub fn create(&self, draft: RecognitionDraft) -> Result<Recognition> {
        let sender = self.resolve(&draft.sender_id)?;
        let visibility: Visibility = draft.visibility.parse()?;

        let record = {
            let mut last = self.clock.lock();
            let created_at = Timestamp::now().max(*last);
            *last = created_at;

            let record = Recognition {
                id: RecognitionId(self.next_id.fetch_add(1, Ordering::SeqCst)),
                sender_id: sender.id,
                recipient_id: draft.recipient_id,
                message: draft.message,
                emoji: draft.emoji,
                visibility,
                created_at,
            };

            // Publish only after the append is visible to readers. Both
            // happen under the creation lock so every subscriber observes
            // pushes in store insertion order.
            self.store.append(record.clone());
            self.hub.publish(&record);
            record
        };

        debug!(id = record.id.0, sender = %record.sender_id, "recognition created");
        Ok(record)
    }

    /// Attach a live subscriber to the broadcast hub.
    pub fn subscribe(&self, config: HubConfig) -> SubscriberHandle {
        self.hub.subscribe(config)
    }

    /// All callers known to the directory.
    pub fn list_callers(&self) -> Vec<Caller> {
        self.directory.list()
    }

    /// Resolve a caller id, for hosts hydrating a recognition's sender or
    /// recipient. Tolerates directory misses.
    pub fn resolve_caller(&self, id: &CallerId) -> Option<Caller> {
        self.directory.resolve(id)
    }

    fn resolve(&self, id: &CallerId) -> Result<Caller> {
        self.directory
            .resolve(id)
            .ok_or_else(|| EngineError::UnknownCaller(id.clone()))
    }
}
