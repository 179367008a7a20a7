pub mod clock;
pub mod components;
pub mod routes;
pub mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::clock::provide_system_clock;
use crate::routes::{
    legal::privacy_policy::PrivacyPolicy, not_found::NotFound, settings::Settings,
};

/// The full HTML document the server wraps around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_system_clock();

    view! {
        <Stylesheet id="leptos" href="/pkg/primmo.css" />
        <Title text="PRIMMO" />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("privacy") view=PrivacyPolicy />
                <Route path=StaticSegment("settings") view=Settings />
            </Routes>
        </Router>
    }
}
