//! Domain models shared by every stage of an upload session.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Identity
// =============================================================================

/// Stable identity of a tracked file, assigned at intake.
///
/// All mutators address entries by this id. File names are not unique
/// within a session and must never be used as a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileId(Uuid);

impl FileId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// File Metadata
// =============================================================================

/// Name, declared MIME type and byte size of a candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    /// File name as reported by the browser
    pub name: String,
    /// Declared MIME type, possibly empty
    pub content_type: String,
    /// Size in bytes
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size,
        }
    }

    /// Lowercased extension of the file name, if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

/// A file handle owned by the runtime that can describe itself.
///
/// The payload is referenced, never copied, by the engine.
pub trait UploadSource {
    fn meta(&self) -> FileMeta;
}

impl UploadSource for FileMeta {
    fn meta(&self) -> FileMeta {
        self.clone()
    }
}

// =============================================================================
// Preview Handle
// =============================================================================

/// Revocable local reference used to render a thumbnail.
///
/// Not `Clone`: the handle is moved out of its entry and consumed by
/// [`crate::PreviewFactory::revoke`], so it can only be released once.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}
