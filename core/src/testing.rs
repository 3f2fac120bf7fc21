//! In-memory fakes for engine tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::api::{
    DeleteRequest, Destination, NegotiateRequest, Notifier, PreviewFactory, ProgressFn,
    StorageBackend,
};
use crate::error::{RemovalError, RemovalResult, TransferError, TransferResult};
use crate::models::{FileMeta, PreviewHandle};
use crate::tracker::Tracker;

pub type SharedTracker = Rc<RefCell<Tracker<FileMeta>>>;

pub fn shared_tracker() -> SharedTracker {
    Rc::new(RefCell::new(Tracker::new()))
}

// =============================================================================
// Backend
// =============================================================================

/// Scripted answer for a PUT.
#[derive(Debug, Clone)]
pub struct PutScript {
    outcome: Result<u16, String>,
    events: Vec<(u64, u64)>,
}

impl PutScript {
    pub fn status(status: u16) -> Self {
        Self {
            outcome: Ok(status),
            events: vec![(1, 2), (2, 2)],
        }
    }

    pub fn transport_error(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            events: Vec::new(),
        }
    }

    pub fn with_events(mut self, events: Vec<(u64, u64)>) -> Self {
        self.events = events;
        self
    }
}

/// Scripted failure for a DELETE.
#[derive(Debug, Clone)]
pub enum DeleteScript {
    Status(u16),
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRecord {
    pub url: String,
    pub content_type: String,
}

/// Storage backend answering from scripts keyed by file name, URL and key.
///
/// Unknown file names fail negotiation with status 500. Unknown URLs
/// accept the upload with status 200. Unknown keys delete successfully.
#[derive(Default)]
pub struct MockBackend {
    destinations: HashMap<String, Destination>,
    puts_scripts: HashMap<String, PutScript>,
    delete_scripts: HashMap<String, DeleteScript>,
    puts: RefCell<Vec<PutRecord>>,
    deletes: RefCell<Vec<String>>,
    observer: RefCell<Option<Box<dyn Fn() -> u8>>>,
    observed: RefCell<Vec<u8>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destination(mut self, file_name: &str, url: &str, key: &str) -> Self {
        self.destinations.insert(
            file_name.to_string(),
            Destination {
                presigned_url: url.to_string(),
                key: key.to_string(),
            },
        );
        self
    }

    pub fn put_script(mut self, url: &str, script: PutScript) -> Self {
        self.puts_scripts.insert(url.to_string(), script);
        self
    }

    pub fn delete_script(mut self, key: &str, script: DeleteScript) -> Self {
        self.delete_scripts.insert(key.to_string(), script);
        self
    }

    /// Sample a value after every progress event.
    pub fn observe(&self, observer: impl Fn() -> u8 + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    pub fn observed_progress(&self) -> Vec<u8> {
        self.observed.borrow().clone()
    }

    pub fn puts(&self) -> Vec<PutRecord> {
        self.puts.borrow().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.deletes.borrow().clone()
    }
}

impl<F> StorageBackend<F> for MockBackend {
    async fn negotiate(&self, request: &NegotiateRequest) -> TransferResult<Destination> {
        tokio::task::yield_now().await;
        self.destinations
            .get(&request.file_name)
            .cloned()
            .ok_or(TransferError::Negotiation { status: 500 })
    }

    async fn put(
        &self,
        url: &str,
        _file: &F,
        content_type: &str,
        on_progress: ProgressFn,
    ) -> TransferResult<u16> {
        self.puts.borrow_mut().push(PutRecord {
            url: url.to_string(),
            content_type: content_type.to_string(),
        });
        let script = self
            .puts_scripts
            .get(url)
            .cloned()
            .unwrap_or_else(|| PutScript::status(200));

        for (sent, total) in script.events {
            tokio::task::yield_now().await;
            on_progress(sent, total);
            if let Some(observer) = self.observer.borrow().as_ref() {
                self.observed.borrow_mut().push(observer());
            }
        }

        script.outcome.map_err(TransferError::Transport)
    }

    async fn delete(&self, request: &DeleteRequest) -> RemovalResult<()> {
        tokio::task::yield_now().await;
        self.deletes.borrow_mut().push(request.key.clone());
        match self.delete_scripts.get(&request.key) {
            None => Ok(()),
            Some(DeleteScript::Status(status)) => Err(RemovalError::Backend { status: *status }),
            Some(DeleteScript::Transport(message)) => Err(RemovalError::Transport(message.clone())),
        }
    }
}

// =============================================================================
// Notifier
// =============================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    successes: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.successes.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

// =============================================================================
// Previews
// =============================================================================

/// Hands out `blob:<name>` handles and records every revocation.
#[derive(Default)]
pub struct CountingPreviews {
    created: RefCell<usize>,
    revoked: RefCell<Vec<String>>,
}

impl CountingPreviews {
    pub fn created(&self) -> usize {
        *self.created.borrow()
    }

    pub fn revoked(&self) -> Vec<String> {
        self.revoked.borrow().clone()
    }
}

impl PreviewFactory<FileMeta> for CountingPreviews {
    fn create(&self, file: &FileMeta) -> Option<PreviewHandle> {
        *self.created.borrow_mut() += 1;
        Some(PreviewHandle::new(format!("blob:{}", file.name)))
    }

    fn revoke(&self, handle: PreviewHandle) {
        self.revoked.borrow_mut().push(handle.url().to_string());
    }
}
