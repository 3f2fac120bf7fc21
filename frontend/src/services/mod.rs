//! Browser services backing the upload engine.
//!
//! # Services
//!
//! - [`storage`] - Presigned-URL negotiation, binary PUT and deletion
//! - [`preview`] - Object URL thumbnails
//! - [`session`] - Reactive tracker store and toast notifier

pub mod storage;
pub mod preview;
pub mod session;

pub use storage::*;
pub use preview::*;
pub use session::*;
