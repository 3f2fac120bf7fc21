//! Thumbnail previews backed by object URLs.

use dropload::{PreviewFactory, PreviewHandle};
use web_sys::Url;

use crate::types::BrowserFile;

/// Creates `blob:` URLs for dropped files and revokes them on removal.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectUrlPreviews;

impl PreviewFactory<BrowserFile> for ObjectUrlPreviews {
    fn create(&self, file: &BrowserFile) -> Option<PreviewHandle> {
        match Url::create_object_url_with_blob(&file.0) {
            Ok(url) => Some(PreviewHandle::new(url)),
            Err(e) => {
                log::warn!("Failed to create preview for {}: {:?}", file.0.name(), e);
                None
            }
        }
    }

    fn revoke(&self, handle: PreviewHandle) {
        if let Err(e) = Url::revoke_object_url(handle.url()) {
            log::warn!("Failed to revoke {}: {:?}", handle.url(), e);
        }
    }
}
