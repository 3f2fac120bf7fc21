//! Dropload - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget for dropping images, previewing them and
//! uploading each one to object storage through presigned URLs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, limits)                                    │
//! │  ├── Dropzone (drag & drop, file picker)                     │
//! │  └── Gallery (thumbnails, progress, delete)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Toaster                                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The upload state machine lives in the `dropload` core crate; this
//! crate provides its browser collaborators and the views.
//!
//! # Modules
//!
//! - [`types`] - Common types (BrowserFile, Toast, etc.)
//! - [`components`] - UI components (Dropzone, Gallery, Toaster, etc.)
//! - [`services`] - Storage HTTP client, previews, reactive session

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    BrowserFile,
    // Toasts
    Toast, ToastLevel,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Dropload"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let (toasts, set_toasts) = create_signal(Vec::<Toast>::new());
    let session = SessionStore::new();
    let storage = HttpStorage::new(BACKEND_URL);
    let notifier = ToastNotifier::new(set_toasts);

    view! {
        <div class="container">
            <Hero/>

            <Dropzone
                session=session.clone()
                storage=storage.clone()
                notifier=notifier
            />

            <Gallery
                session=session
                storage=storage
                notifier=notifier
            />
        </div>

        <Toaster toasts=toasts set_toasts=set_toasts/>
    }
}
