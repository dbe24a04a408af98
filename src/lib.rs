//! # Kudos
//!
//! An in-process recognition engine: short "kudos" messages sent between
//! members of an organization, delivered on request (visibility-filtered
//! queries) and in real time (push to live subscribers).
//!
//! ## Core Concepts
//!
//! - **Recognition**: an append-only record with sender, recipient,
//!   message, emoji, and a visibility level
//! - **Visibility Policy**: pure rules deciding what a viewer may see
//! - **Service**: validates and creates recognitions, answers queries
//! - **Broadcast Hub**: fans each new recognition out to live subscribers
//!
//! All state is process-lifetime and in-memory; transport, identity
//! verification, and serialization formats belong to the host.
//!
//! ## Example
//!
//! ```ignore
//! use kudos::{
//!     BroadcastHub, HubConfig, RecognitionDraft, RecognitionService,
//!     RecognitionStore, StaticDirectory,
//! };
//! use std::sync::Arc;
//!
//! let service = RecognitionService::new(
//!     Arc::new(StaticDirectory::new(callers)),
//!     Arc::new(RecognitionStore::new()),
//!     Arc::new(BroadcastHub::new()),
//! );
//!
//! let live = service.subscribe(HubConfig::default());
//! let created = service.create(RecognitionDraft::new(
//!     "1", "2", "Thanks for the review!", "👏", "PUBLIC",
//! ))?;
//!
//! assert_eq!(live.recv()?, created);
//! ```

pub mod broadcast;
pub mod directory;
pub mod error;
pub mod policy;
pub mod service;
pub mod store;
pub mod types;

// Re-exports
pub use broadcast::{BroadcastHub, DropReason, HubConfig, SubscriberHandle, SubscriberId};
pub use directory::{Directory, StaticDirectory};
pub use error::{EngineError, Result};
pub use service::RecognitionService;
pub use store::RecognitionStore;
pub use types::*;
