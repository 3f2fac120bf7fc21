//! Toast stack for upload, deletion and intake notices.

use leptos::*;

use crate::types::Toast;

#[component]
pub fn Toaster(
    /// Signal for toasts data
    toasts: ReadSignal<Vec<Toast>>,
    /// Set toasts signal (for dismissing)
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    view! {
        <div class="toaster" role="status">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let dismiss = move |_| set_toasts.update(|toasts| toasts.retain(|t| t.id != id));

                    view! {
                        <div class=format!("toast {}", toast.level.css_class()) on:click=dismiss>
                            <span class="toast-time">"[" {toast.timestamp.clone()} "] "</span>
                            {toast.level.emoji()} " " {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
