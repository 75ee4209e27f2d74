use leptos::*;

use super::{Error, ErrorKind, InternalServerError, NotFound};

#[component]
pub fn ErrorFallback(children: Children) -> impl IntoView {
    view! { <ErrorBoundary fallback=fallback>{children()}</ErrorBoundary> }
}

fn fallback(errors: RwSignal<Errors>) -> impl IntoView {
    let fallback = move || {
        errors.get().into_iter().next().map(|(_, err)| {
            let err: Error = err.into();
            tracing::error!(%err, "rendering error page");
            match err.kind {
                ErrorKind::NotFound => view! { <NotFound/> }.into_view(),
                ErrorKind::Config | ErrorKind::Io | ErrorKind::Internal => {
                    view! { <InternalServerError/> }.into_view()
                }
            }
        })
    };
    fallback.into_view()
}
