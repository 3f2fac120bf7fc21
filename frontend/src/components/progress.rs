use leptos::*;
use dropload::{FileSnapshot, Phase};

/// Overlay drawn over a thumbnail while an operation runs or after it failed.
#[component]
pub fn ProgressOverlay(snapshot: Signal<Option<FileSnapshot>>) -> impl IntoView {
    let phase = move || snapshot.get().map(|s| s.phase);
    let progress = move || snapshot.get().map(|s| s.progress).unwrap_or(0);

    view! {
        {move || match phase() {
            Some(Phase::Uploading) => view! {
                <div class="overlay overlay-progress">
                    <div class="progress-bar">
                        <div class="progress-fill" style=move || format!("width: {}%;", progress())></div>
                    </div>
                    <span class="progress-label">{move || format!("{}%", progress())}</span>
                </div>
            }.into_view(),
            Some(Phase::Deleting) => view! {
                <div class="overlay overlay-deleting">"⏳ Deleting..."</div>
            }.into_view(),
            Some(Phase::UploadFailed) => view! {
                <div class="overlay overlay-error">"❌ Upload failed"</div>
            }.into_view(),
            Some(Phase::DeleteFailed) => view! {
                <div class="overlay overlay-error">"❌ Delete failed"</div>
            }.into_view(),
            _ => view! { }.into_view(),
        }}
    }
}
