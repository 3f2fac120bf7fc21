//! Reactive upload session and toast notifications.
//!
//! The tracker lives in a `RefCell` shared by every upload and removal
//! task. Each mutation fires a Leptos trigger so views re-read it.

use std::cell::RefCell;
use std::rc::Rc;

use dropload::{FileId, FileSnapshot, Notifier, Tracker, TrackerStore};
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::{MAX_TOASTS, TOAST_TTL_MS};
use crate::types::{push_capped, BrowserFile, Toast, ToastLevel};

/// Tracker shared between the UI and the async flows.
#[derive(Clone)]
pub struct SessionStore {
    tracker: Rc<RefCell<Tracker<BrowserFile>>>,
    changed: Trigger,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            tracker: Rc::new(RefCell::new(Tracker::new())),
            changed: create_trigger(),
        }
    }

    /// Snapshots in display order. Subscribes the caller to changes.
    pub fn snapshots(&self) -> Vec<FileSnapshot> {
        self.changed.track();
        self.tracker.borrow().snapshots()
    }

    /// Snapshot of one entry. Subscribes the caller to changes.
    pub fn snapshot(&self, id: FileId) -> Option<FileSnapshot> {
        self.changed.track();
        self.tracker.borrow().get(id).map(|entry| entry.snapshot())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerStore<BrowserFile> for SessionStore {
    fn with<R>(&self, f: impl FnOnce(&Tracker<BrowserFile>) -> R) -> R {
        f(&self.tracker.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut Tracker<BrowserFile>) -> R) -> R {
        let result = f(&mut self.tracker.borrow_mut());
        self.changed.notify();
        result
    }
}

/// Add a toast and schedule its dismissal.
pub fn push_toast(set_toasts: WriteSignal<Vec<Toast>>, level: ToastLevel, message: &str) {
    let toast = Toast::new(level, message);
    let id = toast.id;

    set_toasts.update(|toasts| push_capped(toasts, toast, MAX_TOASTS));

    match level {
        ToastLevel::Success => log::info!("{}", message),
        ToastLevel::Error => log::warn!("{}", message),
    }

    spawn_local(async move {
        TimeoutFuture::new(TOAST_TTL_MS).await;
        set_toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    });
}

/// Engine notifications rendered as toasts.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    set_toasts: WriteSignal<Vec<Toast>>,
}

impl ToastNotifier {
    pub fn new(set_toasts: WriteSignal<Vec<Toast>>) -> Self {
        Self { set_toasts }
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        push_toast(self.set_toasts, ToastLevel::Success, message);
    }

    fn error(&self, message: &str) {
        push_toast(self.set_toasts, ToastLevel::Error, message);
    }
}
