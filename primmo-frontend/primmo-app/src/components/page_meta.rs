use leptos::{prelude::*, text_prop::TextProp};
use leptos_meta::*;

/// Sets the document title plus the description and open graph tags for a page.
#[component]
pub fn PageMeta(#[prop(into)] title: TextProp, #[prop(into)] description: TextProp) -> impl IntoView {
    view! {
        <Title text=title.clone() />
        <Meta name="og:title" content=title />
        <Meta name="og:description" property="og:description" content=description.clone() />
        <Meta name="description" content=description />
    }
}
