//! Entry point tying intake to the tracker.
//!
//! [`accept_files`] validates a batch, raises one notice per violation
//! class and creates one idle entry (with its preview) per accepted file.
//! The caller then starts [`crate::upload`] for each returned id.

use crate::api::{Notifier, PreviewFactory};
use crate::intake::{IntakePolicy, Rejection};
use crate::models::{FileId, UploadSource};
use crate::tracker::TrackerStore;

/// Ids created for a batch, with the files that were refused.
#[derive(Debug, Default)]
pub struct AcceptedBatch {
    pub ids: Vec<FileId>,
    pub rejected: Vec<Rejection>,
}

pub fn accept_files<F, S, P, N>(
    store: &S,
    policy: &IntakePolicy,
    previews: &P,
    notifier: &N,
    files: Vec<F>,
) -> AcceptedBatch
where
    F: UploadSource,
    S: TrackerStore<F>,
    P: PreviewFactory<F>,
    N: Notifier,
{
    let outcome = policy.partition(files);
    for notice in outcome.notices() {
        notifier.error(&notice.message);
    }
    let (accepted, rejected) = outcome.into_parts();

    log::debug!("Intake: {} accepted, {} rejected", accepted.len(), rejected.len());

    let ids = accepted
        .into_iter()
        .map(|file| {
            let meta = file.meta();
            let preview = previews.create(&file);
            store.update(|tracker| tracker.create(file, meta, preview))
        })
        .collect();

    AcceptedBatch { ids, rejected }
}
