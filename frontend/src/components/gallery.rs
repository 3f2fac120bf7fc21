//! Thumbnail grid of tracked files.

use dropload::{remove, FileId};
use leptos::*;

use crate::components::ProgressOverlay;
use crate::services::{HttpStorage, ObjectUrlPreviews, SessionStore, ToastNotifier};

#[component]
pub fn Gallery(
    session: SessionStore,
    storage: HttpStorage,
    notifier: ToastNotifier,
) -> impl IntoView {
    let list_session = session.clone();

    view! {
        <div class="gallery">
            <For
                each=move || list_session.snapshots()
                key=|snapshot| snapshot.id
                children=move |snapshot| {
                    view! {
                        <FileCard
                            id=snapshot.id
                            name=snapshot.name
                            session=session.clone()
                            storage=storage.clone()
                            notifier=notifier
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn FileCard(
    id: FileId,
    name: String,
    session: SessionStore,
    storage: HttpStorage,
    notifier: ToastNotifier,
) -> impl IntoView {
    let card_session = session.clone();
    let snapshot = Signal::derive(move || card_session.snapshot(id));

    let is_busy = move || {
        snapshot
            .get()
            .map_or(true, |s| s.uploading() || s.is_deleting())
    };

    let on_delete = move |_| {
        let session = session.clone();
        let storage = storage.clone();
        spawn_local(async move {
            // Failures are already reported on the entry and as a toast
            let _ = remove(&session, &storage, &ObjectUrlPreviews, &notifier, id).await;
        });
    };

    let alt = name.clone();

    view! {
        <div class="file-card" class:error=move || snapshot.get().is_some_and(|s| s.error())>
            {move || match snapshot.get().and_then(|s| s.preview_url) {
                Some(url) => view! { <img class="thumbnail" src=url alt=alt.clone()/> }.into_view(),
                None => view! { <div class="thumbnail thumbnail-missing">"🖼️"</div> }.into_view(),
            }}

            <ProgressOverlay snapshot=snapshot/>

            <div class="file-card-footer">
                <span class="file-name" title=name.clone()>{name.clone()}</span>
                <button
                    type="button"
                    class="btn btn-danger"
                    on:click=on_delete
                    disabled=is_busy
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
