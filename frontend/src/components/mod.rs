//! UI Components for the Dropload application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and limits
//!
//! # Feature Components
//! - [`Dropzone`] - Image drop target and file picker
//! - [`Gallery`] - Thumbnail grid with per-file delete
//! - [`ProgressOverlay`] - Upload progress and error overlay
//! - [`Toaster`] - Notification stack

mod hero;
mod dropzone;
mod gallery;
mod progress;
mod toasts;

pub use hero::*;
pub use dropzone::*;
pub use gallery::*;
pub use progress::*;
pub use toasts::*;
