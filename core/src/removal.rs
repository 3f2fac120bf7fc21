//! Removal flow for tracked files.
//!
//! The preview handle is released first, on every branch, through
//! [`Tracker::take_preview`](crate::Tracker::take_preview). Only a successful
//! deletion removes the entry; a failed one keeps it for a manual retry.

use crate::api::{DeleteRequest, Notifier, PreviewFactory, StorageBackend};
use crate::error::{RemovalError, RemovalResult};
use crate::models::FileId;
use crate::tracker::TrackerStore;

/// How a removal completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removed {
    /// The backend object was deleted and the entry dropped.
    Deleted,
    /// The file never got a storage key; the entry was dropped locally.
    Discarded,
}

/// Remove a tracked file and its stored object.
///
/// Refuses with [`RemovalError::Busy`] while the entry is uploading or
/// already deleting, leaving it untouched.
pub async fn remove<F, S, B, P, N>(
    store: &S,
    backend: &B,
    previews: &P,
    notifier: &N,
    id: FileId,
) -> RemovalResult<Removed>
where
    S: TrackerStore<F>,
    B: StorageBackend<F>,
    P: PreviewFactory<F>,
    N: Notifier,
{
    let (name, key) = store.with(|tracker| -> RemovalResult<(String, Option<String>)> {
        let entry = tracker.get(id).ok_or(RemovalError::NotTracked)?;
        if entry.phase().is_busy() {
            return Err(RemovalError::Busy);
        }
        Ok((entry.meta().name.clone(), entry.key().map(str::to_string)))
    })?;

    release_preview(store, previews, id);

    let Some(key) = key else {
        store.update(|tracker| tracker.remove(id));
        log::info!("Discarded {} (never stored)", name);
        notifier.success(&format!("{} removed", name));
        return Ok(Removed::Discarded);
    };

    store.update(|tracker| tracker.begin_delete(id));
    log::info!("Deleting {} ({})", name, key);

    match backend.delete(&DeleteRequest { key }).await {
        Ok(()) => {
            store.update(|tracker| tracker.remove(id));
            notifier.success(&format!("{} deleted", name));
            Ok(Removed::Deleted)
        }
        Err(e) => {
            store.update(|tracker| tracker.fail_delete(id));
            log::error!("Delete of {} failed: {}", name, e);
            notifier.error(&format!("Failed to delete {}", name));
            Err(e)
        }
    }
}

/// Release the entry's preview handle if it still holds one.
pub fn release_preview<F, S, P>(store: &S, previews: &P, id: FileId)
where
    S: TrackerStore<F>,
    P: PreviewFactory<F>,
{
    if let Some(handle) = store.update(|tracker| tracker.take_preview(id)) {
        previews.revoke(handle);
    }
}
