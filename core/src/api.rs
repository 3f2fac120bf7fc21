//! Collaborators consumed by the engine.
//!
//! The engine never talks to the network or the DOM directly. It goes
//! through these traits, which the web frontend implements with browser
//! APIs and the tests implement with in-memory fakes.
//!
//! # Wire formats
//!
//! | Call      | Request                              | Response                  |
//! |-----------|--------------------------------------|---------------------------|
//! | negotiate | `{fileName, contentType, size}`      | `{presignedUrl, key}`     |
//! | put       | raw bytes, `Content-Type` header     | status 200 or 204         |
//! | delete    | `{key}`                              | any 2xx                   |

#![allow(async_fn_in_trait)]

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{RemovalResult, TransferResult};
use crate::models::{FileMeta, PreviewHandle};

// =============================================================================
// Wire Types
// =============================================================================

/// Body sent to the negotiation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiateRequest {
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
}

impl From<&FileMeta> for NegotiateRequest {
    fn from(meta: &FileMeta) -> Self {
        Self {
            file_name: meta.name.clone(),
            content_type: meta.content_type.clone(),
            size: meta.size,
        }
    }
}

/// Destination returned by the negotiation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub presigned_url: String,
    pub key: String,
}

/// Body sent to the deletion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub key: String,
}

/// Callback receiving `(bytes_sent, bytes_total)` during a transfer.
pub type ProgressFn = Rc<dyn Fn(u64, u64)>;

/// Percentage for a progress event, `round(sent / total * 100)`.
pub fn percent(sent: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = sent.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as u8
}

// =============================================================================
// Traits
// =============================================================================

/// Object storage reached through a presigned-URL flow.
pub trait StorageBackend<F> {
    /// Ask the backend for an upload destination.
    async fn negotiate(&self, request: &NegotiateRequest) -> TransferResult<Destination>;

    /// Send the raw file to `url` and return the HTTP status.
    ///
    /// A non-success status is returned as `Ok`; only transport failures
    /// are errors.
    async fn put(
        &self,
        url: &str,
        file: &F,
        content_type: &str,
        on_progress: ProgressFn,
    ) -> TransferResult<u16>;

    /// Delete the object stored under `key`.
    async fn delete(&self, request: &DeleteRequest) -> RemovalResult<()>;
}

/// User-visible notifications.
pub trait Notifier {
    fn success(&self, message: &str);

    fn error(&self, message: &str);
}

/// Creates and releases thumbnail references.
pub trait PreviewFactory<F> {
    fn create(&self, file: &F) -> Option<PreviewHandle>;

    /// Release a handle. Consumes it, so a handle is released at most once.
    fn revoke(&self, handle: PreviewHandle);
}
