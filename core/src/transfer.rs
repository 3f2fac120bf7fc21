//! Transfer engine: negotiate a destination, then stream the file to it.
//!
//! Each file runs its own two-phase attempt. Attempts interleave only at
//! network suspension points; tracker mutations in between are synchronous.
//! No retries: every failure is terminal for that attempt.

use std::rc::Rc;

use futures::future::join_all;

use crate::api::{percent, NegotiateRequest, Notifier, StorageBackend};
use crate::error::{TransferError, TransferResult};
use crate::models::{FileId, FileMeta};
use crate::tracker::TrackerStore;

/// Statuses the storage destination may answer on success.
const SUCCESS_STATUSES: [u16; 2] = [200, 204];

/// Upload one tracked file and return the storage key on success.
///
/// The entry is marked uploading, then uploaded or failed. Refuses with
/// [`TransferError::Busy`] while the entry is uploading or deleting. The
/// entry may be removed while the attempt runs; later mutations are then
/// no-ops.
pub async fn upload<F, S, B, N>(
    store: &S,
    backend: &B,
    notifier: &N,
    id: FileId,
) -> TransferResult<String>
where
    F: Clone,
    S: TrackerStore<F> + Clone + 'static,
    B: StorageBackend<F>,
    N: Notifier,
{
    let (file, meta) = store.update(|tracker| -> TransferResult<(F, FileMeta)> {
        let entry = tracker.get(id).ok_or(TransferError::NotTracked)?;
        if entry.phase().is_busy() {
            return Err(TransferError::Busy);
        }
        let snapshot = (entry.file().clone(), entry.meta().clone());
        tracker.begin_upload(id);
        Ok(snapshot)
    })?;

    log::info!("Uploading {} ({} bytes)", meta.name, meta.size);

    let result = transmit(store, backend, id, &file, &NegotiateRequest::from(&meta)).await;

    match &result {
        Ok(key) => {
            store.update(|tracker| {
                tracker.set_key(id, key);
                tracker.finish_upload(id)
            });
            log::info!("Uploaded {} as {}", meta.name, key);
            notifier.success(&format!("{} uploaded successfully", meta.name));
        }
        Err(e) => {
            store.update(|tracker| tracker.fail_upload(id));
            log::warn!("Upload of {} failed: {}", meta.name, e);
            notifier.error(&format!("Failed to upload {}", meta.name));
        }
    }

    result
}

async fn transmit<F, S, B>(
    store: &S,
    backend: &B,
    id: FileId,
    file: &F,
    request: &NegotiateRequest,
) -> TransferResult<String>
where
    S: TrackerStore<F> + Clone + 'static,
    B: StorageBackend<F>,
{
    let destination = backend.negotiate(request).await?;
    log::debug!("Destination for {}: key {}", request.file_name, destination.key);
    store.update(|tracker| tracker.set_key(id, &destination.key));

    let progress_store = store.clone();
    let key = destination.key.clone();
    let on_progress = Rc::new(move |sent: u64, total: u64| {
        let pct = percent(sent, total);
        progress_store.update(|tracker| tracker.record_progress(id, pct, &key));
    });

    let status = backend
        .put(&destination.presigned_url, file, &request.content_type, on_progress)
        .await?;

    if SUCCESS_STATUSES.contains(&status) {
        Ok(destination.key)
    } else {
        Err(TransferError::Status(status))
    }
}

/// Upload several files concurrently.
///
/// Results come back in the order of `ids`; completions may happen in
/// any order and one failure does not affect the others.
pub async fn upload_all<F, S, B, N>(
    store: &S,
    backend: &B,
    notifier: &N,
    ids: &[FileId],
) -> Vec<TransferResult<String>>
where
    F: Clone,
    S: TrackerStore<F> + Clone + 'static,
    B: StorageBackend<F>,
    N: Notifier,
{
    join_all(ids.iter().map(|id| upload(store, backend, notifier, *id))).await
}
