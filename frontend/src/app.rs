use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{config::provide_frontend_config, errors::ErrorFallback, pages::*};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_frontend_config();

    view! {
        <Stylesheet id="leptos" href="/pkg/maintenance.css"/>

        <Router>
            <ErrorFallback>
                <Pages/>
            </ErrorFallback>
        </Router>
    }
}
