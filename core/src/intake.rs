//! Intake validation for dropped or selected files.
//!
//! A batch is split into accepted files and rejections. Rejections are
//! grouped by [`RejectionReason`] so the UI raises at most one notice per
//! violation class, however many files violate it.

use serde::{Deserialize, Serialize};

use crate::models::UploadSource;

/// Maximum number of files accepted from a single batch.
pub const DEFAULT_MAX_FILES: usize = 5;

/// Maximum size of a single file (5 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Accepted MIME pattern.
pub const DEFAULT_ACCEPT: &str = "image/*";

/// Extensions treated as images when the browser reports no MIME type.
const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "svg", "avif", "ico", "tif", "tiff",
];

/// Why a file was refused at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionReason {
    /// The batch exceeded the file count limit.
    TooManyFiles,
    /// The file exceeded the size limit.
    FileTooLarge,
    /// The file is not of an accepted type.
    WrongType,
}

/// A refused file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub name: String,
    pub reason: RejectionReason,
}

/// One user-facing notice for a violation class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeNotice {
    pub reason: RejectionReason,
    pub message: String,
}

/// Result of validating a batch.
#[derive(Debug)]
pub struct IntakeOutcome<F> {
    pub accepted: Vec<F>,
    pub rejected: Vec<Rejection>,
    notices: Vec<IntakeNotice>,
}

impl<F> IntakeOutcome<F> {
    /// One notice per violation class present, in a fixed order.
    pub fn notices(&self) -> &[IntakeNotice] {
        &self.notices
    }

    pub fn into_parts(self) -> (Vec<F>, Vec<Rejection>) {
        (self.accepted, self.rejected)
    }
}

/// Count, size and type constraints applied to each batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakePolicy {
    pub max_files: usize,
    pub max_file_size: u64,
    /// MIME pattern such as `image/*` or `image/png`
    pub accept: String,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            accept: DEFAULT_ACCEPT.to_string(),
        }
    }
}

impl IntakePolicy {
    /// Split a batch into accepted files and rejections.
    ///
    /// Entries past `max_files` are refused as [`RejectionReason::TooManyFiles`]
    /// without further checks. The others are checked for type, then size.
    pub fn partition<F: UploadSource>(&self, files: Vec<F>) -> IntakeOutcome<F> {
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for (index, file) in files.into_iter().enumerate() {
            let meta = file.meta();
            let reason = if index >= self.max_files {
                Some(RejectionReason::TooManyFiles)
            } else if !self.accepts_type(&meta.content_type, meta.extension().as_deref()) {
                Some(RejectionReason::WrongType)
            } else if meta.size > self.max_file_size {
                Some(RejectionReason::FileTooLarge)
            } else {
                None
            };

            match reason {
                Some(reason) => {
                    log::debug!("Rejected {} ({:?})", meta.name, reason);
                    rejected.push(Rejection {
                        name: meta.name,
                        reason,
                    });
                }
                None => accepted.push(file),
            }
        }

        let notices = self.notices_for(&rejected);
        IntakeOutcome {
            accepted,
            rejected,
            notices,
        }
    }

    /// User-facing message for a violation class.
    pub fn message(&self, reason: RejectionReason) -> String {
        match reason {
            RejectionReason::TooManyFiles => {
                format!("You can only upload up to {} files at a time.", self.max_files)
            }
            RejectionReason::FileTooLarge => {
                format!(
                    "File size exceeds the {} MB limit.",
                    self.max_file_size / (1024 * 1024)
                )
            }
            RejectionReason::WrongType => "Only image files are accepted.".to_string(),
        }
    }

    fn notices_for(&self, rejected: &[Rejection]) -> Vec<IntakeNotice> {
        [
            RejectionReason::TooManyFiles,
            RejectionReason::FileTooLarge,
            RejectionReason::WrongType,
        ]
        .into_iter()
        .filter(|reason| rejected.iter().any(|r| r.reason == *reason))
        .map(|reason| IntakeNotice {
            reason,
            message: self.message(reason),
        })
        .collect()
    }

    fn accepts_type(&self, content_type: &str, extension: Option<&str>) -> bool {
        let content_type = content_type.trim().to_ascii_lowercase();
        if content_type.is_empty() {
            // Browsers leave the type empty for unknown extensions
            return self.accept.starts_with("image/")
                && extension.is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext));
        }

        match self.accept.strip_suffix("/*") {
            Some(family) => content_type
                .split_once('/')
                .is_some_and(|(kind, _)| kind == family),
            None => content_type == self.accept,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileMeta;

    fn png(name: &str, size: u64) -> FileMeta {
        FileMeta::new(name, "image/png", size)
    }

    #[test]
    fn test_six_images_keeps_five() {
        let policy = IntakePolicy::default();
        let batch: Vec<_> = (0..6).map(|i| png(&format!("pixel-{}.png", i), 68)).collect();

        let outcome = policy.partition(batch);

        assert_eq!(outcome.accepted.len(), 5);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].name, "pixel-5.png");
        assert_eq!(outcome.notices().len(), 1);
        assert_eq!(outcome.notices()[0].reason, RejectionReason::TooManyFiles);
        assert_eq!(
            outcome.notices()[0].message,
            "You can only upload up to 5 files at a time."
        );
    }

    #[test]
    fn test_too_many_notice_regardless_of_other_violations() {
        let policy = IntakePolicy::default();
        let mut batch: Vec<_> = (0..7).map(|i| png(&format!("{}.png", i), 10)).collect();
        batch[0].size = 10 * 1024 * 1024;

        let outcome = policy.partition(batch);
        let too_many: Vec<_> = outcome
            .notices()
            .iter()
            .filter(|n| n.reason == RejectionReason::TooManyFiles)
            .collect();

        assert_eq!(too_many.len(), 1);
        assert_eq!(outcome.accepted.len(), 4);
    }

    #[test]
    fn test_large_file_single_notice() {
        let policy = IntakePolicy::default();
        let outcome = policy.partition(vec![png("huge.png", 10 * 1024 * 1024)]);

        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.notices().len(), 1);
        assert_eq!(outcome.notices()[0].reason, RejectionReason::FileTooLarge);
        assert_eq!(outcome.notices()[0].message, "File size exceeds the 5 MB limit.");
    }

    #[test]
    fn test_several_large_files_one_notice() {
        let policy = IntakePolicy::default();
        let outcome = policy.partition(vec![
            png("a.png", 6 * 1024 * 1024),
            png("b.png", 7 * 1024 * 1024),
            png("c.png", 1024),
        ]);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.rejected.len(), 2);
        assert_eq!(outcome.notices().len(), 1);
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let policy = IntakePolicy::default();
        let outcome = policy.partition(vec![png("edge.png", DEFAULT_MAX_FILE_SIZE)]);
        assert_eq!(outcome.accepted.len(), 1);
    }

    #[test]
    fn test_rejects_non_images() {
        let policy = IntakePolicy::default();
        let outcome = policy.partition(vec![
            FileMeta::new("notes.txt", "text/plain", 12),
            FileMeta::new("scan.webp", "IMAGE/WEBP", 12),
        ]);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.rejected[0].reason, RejectionReason::WrongType);
        assert_eq!(outcome.notices()[0].message, "Only image files are accepted.");
    }

    #[test]
    fn test_empty_mime_falls_back_to_extension() {
        let policy = IntakePolicy::default();
        let outcome = policy.partition(vec![
            FileMeta::new("photo.HEIC", "", 12),
            FileMeta::new("photo.jpeg", "", 12),
        ]);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].name, "photo.jpeg");
    }

    #[test]
    fn test_exact_accept_pattern() {
        let policy = IntakePolicy {
            accept: "image/png".into(),
            ..IntakePolicy::default()
        };
        let outcome = policy.partition(vec![
            png("a.png", 1),
            FileMeta::new("b.jpg", "image/jpeg", 1),
        ]);
        assert_eq!(outcome.accepted.len(), 1);
    }

    #[test]
    fn test_notices_ordered_by_class() {
        let policy = IntakePolicy::default();
        let mut batch = vec![
            FileMeta::new("doc.pdf", "application/pdf", 1),
            png("big.png", 9 * 1024 * 1024),
        ];
        batch.extend((0..4).map(|i| png(&format!("{}.png", i), 1)));

        let outcome = policy.partition(batch);
        let reasons: Vec<_> = outcome.notices().iter().map(|n| n.reason).collect();

        assert_eq!(
            reasons,
            vec![
                RejectionReason::TooManyFiles,
                RejectionReason::FileTooLarge,
                RejectionReason::WrongType,
            ]
        );
    }
}
