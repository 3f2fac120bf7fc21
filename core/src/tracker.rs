//! Upload session tracker.
//!
//! Holds one [`TrackedFile`] per accepted file, in insertion (display)
//! order. Each entry carries a single [`Phase`], so an entry cannot be
//! uploading and deleting at the same time.
//!
//! Mutators are keyed by [`FileId`] and return `false` when the entry no
//! longer exists, which happens when a late network event arrives for a
//! file that was already removed.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::models::{FileId, FileMeta, PreviewHandle};

// =============================================================================
// Phase
// =============================================================================

/// Lifecycle phase of a tracked file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Created, transfer not started yet
    Idle,
    /// Negotiation or transfer in flight
    Uploading,
    /// Transfer completed with 200/204
    Uploaded,
    /// Negotiation or transfer failed
    UploadFailed,
    /// Deletion request in flight
    Deleting,
    /// Deletion request failed, entry kept for retry
    DeleteFailed,
}

impl Phase {
    pub fn is_uploading(self) -> bool {
        self == Phase::Uploading
    }

    pub fn is_deleting(self) -> bool {
        self == Phase::Deleting
    }

    pub fn is_error(self) -> bool {
        matches!(self, Phase::UploadFailed | Phase::DeleteFailed)
    }

    /// Whether a network operation is in flight for the entry.
    pub fn is_busy(self) -> bool {
        self.is_uploading() || self.is_deleting()
    }
}

// =============================================================================
// Tracked File
// =============================================================================

/// In-memory record of one file's journey.
#[derive(Debug)]
pub struct TrackedFile<F> {
    id: FileId,
    file: F,
    meta: FileMeta,
    phase: Phase,
    progress: u8,
    key: Option<String>,
    preview: Option<PreviewHandle>,
}

impl<F> TrackedFile<F> {
    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn meta(&self) -> &FileMeta {
        &self.meta
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Percentage in `[0, 100]`.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Storage key assigned by the backend, once negotiated.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn uploading(&self) -> bool {
        self.phase.is_uploading()
    }

    pub fn is_deleting(&self) -> bool {
        self.phase.is_deleting()
    }

    pub fn error(&self) -> bool {
        self.phase.is_error()
    }

    /// URL of the thumbnail, until the handle is released.
    pub fn preview_url(&self) -> Option<&str> {
        self.preview.as_ref().map(PreviewHandle::url)
    }

    /// Owned, cloneable view of the entry for rendering.
    pub fn snapshot(&self) -> FileSnapshot {
        FileSnapshot {
            id: self.id,
            name: self.meta.name.clone(),
            phase: self.phase,
            progress: self.progress,
            key: self.key.clone(),
            preview_url: self.preview_url().map(str::to_string),
        }
    }
}

/// Cloneable copy of a tracked entry, without the file payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSnapshot {
    pub id: FileId,
    pub name: String,
    pub phase: Phase,
    pub progress: u8,
    pub key: Option<String>,
    pub preview_url: Option<String>,
}

impl FileSnapshot {
    pub fn uploading(&self) -> bool {
        self.phase.is_uploading()
    }

    pub fn is_deleting(&self) -> bool {
        self.phase.is_deleting()
    }

    pub fn error(&self) -> bool {
        self.phase.is_error()
    }
}

// =============================================================================
// Tracker
// =============================================================================

/// Ordered collection of tracked files.
#[derive(Debug)]
pub struct Tracker<F> {
    entries: Vec<TrackedFile<F>>,
}

impl<F> Default for Tracker<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F> Tracker<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new idle entry and return its id.
    pub fn create(&mut self, file: F, meta: FileMeta, preview: Option<PreviewHandle>) -> FileId {
        let id = FileId::new();
        self.entries.push(TrackedFile {
            id,
            file,
            meta,
            phase: Phase::Idle,
            progress: 0,
            key: None,
            preview,
        });
        id
    }

    pub fn get(&self, id: FileId) -> Option<&TrackedFile<F>> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedFile<F>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn snapshots(&self) -> Vec<FileSnapshot> {
        self.entries.iter().map(TrackedFile::snapshot).collect()
    }

    /// Start a fresh upload attempt: progress resets to 0.
    pub fn begin_upload(&mut self, id: FileId) -> bool {
        self.modify(id, |entry| {
            entry.phase = Phase::Uploading;
            entry.progress = 0;
        })
    }

    /// Record a progress event and the destination key.
    ///
    /// Ignored unless the entry is uploading. Progress never moves backwards
    /// and stays below 100 until [`Tracker::finish_upload`].
    pub fn record_progress(&mut self, id: FileId, percent: u8, key: &str) -> bool {
        self.modify(id, |entry| {
            if entry.phase != Phase::Uploading {
                return;
            }
            entry.progress = entry.progress.max(percent.min(99));
            if entry.key.as_deref() != Some(key) {
                entry.key = Some(key.to_string());
            }
        })
    }

    pub fn set_key(&mut self, id: FileId, key: &str) -> bool {
        self.modify(id, |entry| entry.key = Some(key.to_string()))
    }

    pub fn finish_upload(&mut self, id: FileId) -> bool {
        self.modify(id, |entry| {
            entry.phase = Phase::Uploaded;
            entry.progress = 100;
        })
    }

    /// Mark the attempt failed and discard partial progress.
    pub fn fail_upload(&mut self, id: FileId) -> bool {
        self.modify(id, |entry| {
            entry.phase = Phase::UploadFailed;
            entry.progress = 0;
        })
    }

    pub fn begin_delete(&mut self, id: FileId) -> bool {
        self.modify(id, |entry| entry.phase = Phase::Deleting)
    }

    pub fn fail_delete(&mut self, id: FileId) -> bool {
        self.modify(id, |entry| entry.phase = Phase::DeleteFailed)
    }

    /// Move the preview handle out of the entry.
    ///
    /// Returns `None` once the handle has already been taken, so the
    /// caller releases it at most once.
    pub fn take_preview(&mut self, id: FileId) -> Option<PreviewHandle> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .and_then(|entry| entry.preview.take())
    }

    /// Remove the entry, keeping the order of the others.
    pub fn remove(&mut self, id: FileId) -> Option<TrackedFile<F>> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    fn modify(&mut self, id: FileId, f: impl FnOnce(&mut TrackedFile<F>)) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                f(entry);
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// Shared access to a tracker from asynchronous flows.
///
/// Closures run synchronously and must not be held across an `.await`,
/// so concurrent flows only interleave between whole mutations.
pub trait TrackerStore<F> {
    fn with<R>(&self, f: impl FnOnce(&Tracker<F>) -> R) -> R;

    fn update<R>(&self, f: impl FnOnce(&mut Tracker<F>) -> R) -> R;
}

impl<F> TrackerStore<F> for Rc<RefCell<Tracker<F>>> {
    fn with<R>(&self, f: impl FnOnce(&Tracker<F>) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut Tracker<F>) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
