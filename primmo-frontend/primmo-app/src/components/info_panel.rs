use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

#[component]
pub fn InfoPanel(title: &'static str, description: &'static str, icon: IconData) -> impl IntoView {
    view! {
        <div class="p-4 bg-gray-50 rounded-lg">
            <h3 class="font-medium mb-2 flex items-center gap-2">
                <Icon icon=icon />
                {title}
            </h3>
            <p class="text-sm text-gray-600">{description}</p>
        </div>
    }
}
