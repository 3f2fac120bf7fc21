//! Hero section component

use leptos::*;

use crate::config::{MAX_FILES, MAX_FILE_SIZE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Dropload - Image Upload"</h1>
            <p class="subtitle">
                {format!(
                    "Upload up to {} images at a time, {} MB each. Files go straight to storage.",
                    MAX_FILES,
                    MAX_FILE_SIZE / (1024 * 1024)
                )}
            </p>
        </div>
    }
}
