//! Image drop zone with drag & drop and file picker.
//!
//! Validates each batch, creates tracked entries and starts one upload
//! task per accepted file.

use dropload::{accept_files, upload};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::config::{intake_policy, ACCEPT};
use crate::services::{HttpStorage, ObjectUrlPreviews, SessionStore, ToastNotifier};
use crate::types::{files_from_list, BrowserFile};

const FILE_INPUT_ID: &str = "dropzoneInput";

#[component]
pub fn Dropzone(
    session: SessionStore,
    storage: HttpStorage,
    notifier: ToastNotifier,
) -> impl IntoView {
    let (is_drag_active, set_is_drag_active) = create_signal(false);
    // dragenter/dragleave also fire on child elements
    let (drag_depth, set_drag_depth) = create_signal(0u32);

    let handle_files = move |files: Vec<BrowserFile>| {
        if files.is_empty() {
            return;
        }

        let batch = accept_files(&session, &intake_policy(), &ObjectUrlPreviews, &notifier, files);
        log::info!("📥 {} files accepted", batch.ids.len());

        for id in batch.ids {
            let session = session.clone();
            let storage = storage.clone();
            spawn_local(async move {
                // Failures are already reported on the entry and as a toast
                let _ = upload(&session, &storage, &notifier, id).await;
            });
        }
    };

    // Handler pour le changement de fichier
    let handle_input = handle_files.clone();
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            handle_input(files_from_list(&files));
        }
        // Allow selecting the same files again
        input.set_value("");
    };

    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_depth.update(|depth| *depth += 1);
        set_is_drag_active.set(true);
    };

    let on_drag_over = move |ev: DragEvent| ev.prevent_default();

    let on_drag_leave = move |_: DragEvent| {
        set_drag_depth.update(|depth| *depth = depth.saturating_sub(1));
        if drag_depth.get_untracked() == 0 {
            set_is_drag_active.set(false);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_depth.set(0);
        set_is_drag_active.set(false);
        let files = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .map(|list| files_from_list(&list))
            .unwrap_or_default();
        handle_files(files);
    };

    // Handler pour cliquer sur la zone entière
    let trigger_file_input = move |_| {
        if let Some(input) = gloo_utils::document().get_element_by_id(FILE_INPUT_ID) {
            if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                html_input.click();
            }
        }
    };

    view! {
        <div
            class="dropzone"
            class:active=move || is_drag_active.get()
            on:click=trigger_file_input
            on:dragenter=on_drag_enter
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <input
                type="file"
                id=FILE_INPUT_ID
                accept=ACCEPT
                multiple=true
                style="display:none"
                on:click=|ev| ev.stop_propagation()
                on:change=on_file_change
            />

            <Show
                when=move || is_drag_active.get()
                fallback=|| view! {
                    <div class="dropzone-idle">
                        <p>"Drag drop some files here, or click to select files"</p>
                        <button type="button" class="btn btn-primary">"Select files"</button>
                    </div>
                }
            >
                <p>"Drop the files here ..."</p>
            </Show>
        </div>
    }
}
