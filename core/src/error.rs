//! Error types for the upload session engine.
//!
//! - [`TransferError`] - negotiation and binary transfer failures
//! - [`RemovalError`] - deletion failures
//!
//! Intake violations are not errors: they are reported through
//! [`crate::intake::RejectionReason`] and never abort a batch.
//!
//! Every failure here is scoped to a single tracked file.

use thiserror::Error;

// =============================================================================
// Transfer Errors
// =============================================================================

/// Errors while negotiating a destination or sending the file bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The negotiation endpoint answered with a non-success status.
    #[error("Upload negotiation failed with status {status}")]
    Negotiation { status: u16 },

    /// The negotiation response could not be decoded.
    #[error("Invalid negotiation response: {0}")]
    Decode(String),

    /// The request never completed (network error, CORS, aborted).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The storage destination answered with a status other than 200/204.
    #[error("Storage rejected the upload with status {0}")]
    Status(u16),

    /// No tracked entry exists for the requested id.
    #[error("File is not tracked")]
    NotTracked,

    /// The entry is already uploading or being deleted.
    #[error("File is busy")]
    Busy,
}

// =============================================================================
// Removal Errors
// =============================================================================

/// Errors while removing a tracked file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemovalError {
    /// No tracked entry exists for the requested id.
    #[error("File is not tracked")]
    NotTracked,

    /// The entry is uploading or already being deleted.
    #[error("File is busy")]
    Busy,

    /// The deletion endpoint answered with a non-success status.
    #[error("Delete failed with status {status}")]
    Backend { status: u16 },

    /// The request never completed.
    #[error("Transport error: {0}")]
    Transport(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for transfer operations.
pub type TransferResult<T> = Result<T, TransferError>;

/// Result type for removal operations.
pub type RemovalResult<T> = Result<T, RemovalError>;
