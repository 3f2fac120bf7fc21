//! # Dropload - upload session engine
//!
//! Platform-independent core of the Dropload image upload widget. Files are
//! validated at intake, tracked one entry per file, uploaded through a
//! presigned-URL flow and deleted on request.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Drop/Pick  │────▶│   Intake    │────▶│   Tracker   │◀───▶│  Transfer   │
//! │  (browser)  │     │ (count/size │     │ (one entry  │     │ (negotiate, │
//! └─────────────┘     │   /type)    │     │  per file)  │     │    PUT)     │
//!                     └─────────────┘     └──────┬──────┘     └─────────────┘
//!                                                │
//!                                          ┌─────▼──────┐
//!                                          │  Removal   │
//!                                          │  (DELETE)  │
//!                                          └────────────┘
//! ```
//!
//! The engine is single-threaded: flows are plain futures driven by the
//! host's local executor, and they reach the network, the DOM and the user
//! only through the traits in [`api`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let batch = accept_files(&store, &IntakePolicy::default(), &previews, &notifier, files);
//! for id in batch.ids {
//!     spawn_local(async move { let _ = upload(&store, &backend, &notifier, id).await; });
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Transfer and removal errors
//! - [`models`] - File identity, metadata and preview handles
//! - [`api`] - Wire types and collaborator traits
//! - [`intake`] - Batch validation
//! - [`tracker`] - Upload session tracker
//! - [`session`] - Intake into the tracker
//! - [`transfer`] - Two-phase upload
//! - [`removal`] - Deletion flow

// Core modules
pub mod error;
pub mod models;
pub mod api;

// Session
pub mod intake;
pub mod tracker;
pub mod session;

// Network flows
pub mod transfer;
pub mod removal;

#[cfg(test)]
pub(crate) mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{RemovalError, RemovalResult, TransferError, TransferResult};

pub use models::{FileId, FileMeta, PreviewHandle, UploadSource};

pub use api::{
    percent, DeleteRequest, Destination, NegotiateRequest, Notifier, PreviewFactory, ProgressFn,
    StorageBackend,
};

pub use intake::{
    IntakeNotice, IntakeOutcome, IntakePolicy, Rejection, RejectionReason, DEFAULT_ACCEPT,
    DEFAULT_MAX_FILES, DEFAULT_MAX_FILE_SIZE,
};

pub use tracker::{FileSnapshot, Phase, TrackedFile, Tracker, TrackerStore};

pub use session::{accept_files, AcceptedBatch};

pub use transfer::{upload, upload_all};

pub use removal::{release_preview, remove, Removed};
