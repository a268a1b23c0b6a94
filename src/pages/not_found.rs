use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-12">
            <h2 class="text-3xl font-bold mb-4">{ "Page not found" }</h2>
            <A href="/">{ "Back to the home page" }</A>
        </div>
    }
}
