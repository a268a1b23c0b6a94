/// Root component: backend handle, toasts and routes.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::backend::Backend;
use crate::components::toaster::Toaster;
use crate::config::BackendConfig;
use crate::pages::{home::HomePage, not_found::NotFound};
use crate::toast::ToastQueue;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let backend = Backend::connect(BackendConfig::from_build_env());
    let toasts = ToastQueue::new();

    view! {
        <Stylesheet id="leptos" href="/pkg/savory.css" />
        <Title text="Savory" />
        <Router>
            <main>
                <Routes>
                    <Route
                        path="/"
                        view=move || view! { <HomePage backend=backend.clone() notifier=toasts /> }
                    />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
            <Toaster queue=toasts />
        </Router>
    }
}
