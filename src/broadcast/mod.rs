//! Live broadcast of newly created recognitions.
//!
//! The hub owns a registry of active subscribers, each with an independent
//! bounded delivery queue. Publishing is fire-and-forget: a non-blocking
//! send per subscriber, with slow or disconnected subscribers dropped
//! individually rather than stalling the rest.
//!
//! # Example
//!
//! ```ignore
//! let hub = BroadcastHub::new();
//! let handle = hub.subscribe(HubConfig::default());
//!
//! // elsewhere, after a recognition is created and stored:
//! hub.publish(&recognition);
//!
//! match handle.recv() {
//!     Ok(recognition) => println!("new recognition: {:?}", recognition),
//!     Err(_) => { /* hub dropped us or shut down */ }
//! }
//! ```

mod hub;
mod types;

pub use hub::BroadcastHub;
pub use types::{DropReason, HubConfig, SubscriberHandle, SubscriberId};
