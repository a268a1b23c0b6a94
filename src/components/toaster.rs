use leptos::*;
use crate::toast::ToastQueue;

/// Stack of transient notifications in the corner of the page.
#[component]
pub fn Toaster(queue: ToastQueue) -> impl IntoView {
    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || queue.visible()
                key=|(id, _)| *id
                children=move |(id, toast)| view! {
                    <div class=toast.variant.class() role="status">
                        <div class="toast-body">
                            <strong class="toast-title">{ toast.title }</strong>
                            <p class="toast-description">{ toast.description }</p>
                        </div>
                        <button class="toast-close" aria-label="Dismiss" on:click=move |_| queue.dismiss(id)>
                            { "×" }
                        </button>
                    </div>
                }
            />
        </div>
    }
}
