//! Application configuration.
//!
//! Centralized configuration for the Dropload frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

use dropload::IntakePolicy;

/// Backend API base URL.
///
/// Issues presigned upload URLs and deletes stored objects.
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Negotiation endpoint, relative to [`BACKEND_URL`].
pub const PRESIGN_PATH: &str = "/api/uploads/presign";

/// Deletion endpoint, relative to [`BACKEND_URL`].
pub const DELETE_PATH: &str = "/api/uploads";

/// Maximum files per drop or selection.
pub const MAX_FILES: usize = 5;

/// Maximum file size for upload (in bytes).
///
/// 5 MB limit.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Accepted MIME pattern, also used for the file input.
pub const ACCEPT: &str = "image/*";

/// Maximum toasts kept on screen.
pub const MAX_TOASTS: usize = 5;

/// Toast lifetime in milliseconds.
pub const TOAST_TTL_MS: u32 = 4_000;

/// Intake policy built from the constants above.
pub fn intake_policy() -> IntakePolicy {
    IntakePolicy {
        max_files: MAX_FILES,
        max_file_size: MAX_FILE_SIZE,
        accept: ACCEPT.to_string(),
    }
}
