use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    cfg_if::cfg_if! {
        if #[cfg(feature = "ssr")] {
            if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
                response.set_status(axum::http::StatusCode::NOT_FOUND);
            }
        }
    }
    view! {
        <Title text="Page Not Found - PRIMMO" />
        <main class="max-w-3xl mx-auto p-8 text-center space-y-6">
            <h1 class="text-3xl font-bold">"Page Not Found"</h1>
            <p class="text-gray-600">"The page you are looking for does not exist."</p>
            <div class="flex justify-center gap-4">
                <A href="/settings" attr:class="px-4 py-2 bg-blue-600 text-white rounded-lg">
                    "Settings"
                </A>
                <A href="/privacy" attr:class="px-4 py-2 border rounded-lg">
                    "Privacy Policy"
                </A>
            </div>
        </main>
    }
}
