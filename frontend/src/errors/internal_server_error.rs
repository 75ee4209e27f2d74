use leptos::*;
use leptos_meta::*;

/// 500 - Internal Server Error
#[component]
pub fn InternalServerError() -> impl IntoView {
    // the status can only be set during the initial server-side render,
    // client-side navigation to this page keeps whatever status was sent
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_actix::ResponseOptions>() {
            resp.set_status(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            );
        }
    }

    view! {
        <Title text="Internal Server Error"/>
        <main class="flex min-h-screen items-center justify-center">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-gray-100">
                "Something is broken"
            </h1>
        </main>
    }
}
