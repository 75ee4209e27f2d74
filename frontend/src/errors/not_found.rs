use leptos::*;
use leptos_meta::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_actix::ResponseOptions>() {
            resp.set_status(actix_web::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found"/>
        <main class="flex min-h-screen flex-col items-center justify-center">
            <h1 class="mb-4 text-4xl font-bold text-gray-900 dark:text-gray-100">"404"</h1>
            <p class="text-lg text-gray-600 dark:text-gray-400">"Page not found"</p>
        </main>
    }
}
