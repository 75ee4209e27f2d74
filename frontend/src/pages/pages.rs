use leptos::*;
use leptos_router::*;

use super::maintenance::maintenance_view;
use crate::{config::with_frontend_config, errors::NotFound, pages::*};

#[component]
pub fn Pages() -> impl IntoView {
    // Async so <head> and the status code are settled before the response
    // is sent
    view! {
        <Routes>
            <Route path="/maintenance" view=Maintenance ssr=SsrMode::Async/>

            // Fallback
            <Route path="/*any" view=Fallback ssr=SsrMode::Async/>
        </Routes>
    }
}

/// Every unknown path shows the notice while maintenance mode is on
#[component]
fn Fallback() -> impl IntoView {
    with_frontend_config(|config| {
        if config.maintenance.enabled {
            maintenance_view(config).into_view()
        } else {
            view! { <NotFound/> }.into_view()
        }
    })
}
