use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

/// A labelled setting: icon, label and description on the left, the control on the right.
#[component]
pub fn PreferenceRow(
    label: &'static str,
    description: &'static str,
    icon: IconData,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 bg-gray-50 rounded-lg">
            <div class="flex items-start gap-3">
                <span class="text-xl text-gray-500"><Icon icon=icon /></span>
                <div>
                    <h3 class="font-medium">{label}</h3>
                    <p class="text-sm text-gray-600">{description}</p>
                </div>
            </div>
            {children()}
        </div>
    }
}
