use leptos::*;
use leptos_meta::*;

use crate::{
    components::GearIcon,
    config::{with_frontend_config, FrontendConfig, SiteMetadata},
};

/// Value of the robots meta tag, keeps the notice out of search results
pub const ROBOTS_NOINDEX: &str = "noindex";

pub fn page_title(metadata: &SiteMetadata) -> String {
    format!("Maintenance Mode - {}", metadata.title)
}

/// Maintenance notice for the configured site.
///
/// While maintenance mode is enabled the response is sent as
/// `503 Service Unavailable`.
#[component]
pub fn Maintenance() -> impl IntoView {
    with_frontend_config(maintenance_view)
}

pub(crate) fn maintenance_view(config: FrontendConfig) -> impl IntoView {
    if config.maintenance.enabled {
        set_unavailable_status(config.maintenance.retry_after);
    }
    view! { <MaintenanceNotice metadata=config.site/> }
}

#[cfg(feature = "ssr")]
fn set_unavailable_status(retry_after: Option<u64>) {
    use actix_web::http::{header, StatusCode};

    // only present during the initial server-side render
    let Some(resp) = use_context::<leptos_actix::ResponseOptions>() else {
        return;
    };
    resp.set_status(StatusCode::SERVICE_UNAVAILABLE);
    if let Some(secs) = retry_after {
        resp.insert_header(header::RETRY_AFTER, header::HeaderValue::from(secs));
    }
}

#[cfg(not(feature = "ssr"))]
fn set_unavailable_status(_retry_after: Option<u64>) {}

/// The notice itself, a pure function of `metadata`
#[component]
pub fn MaintenanceNotice(metadata: SiteMetadata) -> impl IntoView {
    view! {
        <Title text=page_title(&metadata)/>
        <Meta name="robots" content=ROBOTS_NOINDEX/>
        <div class="flex min-h-screen flex-col items-center justify-center bg-gray-50 dark:bg-gray-900">
            <div class="mx-auto max-w-md px-4 text-center">
                <div class="mb-8">
                    <GearIcon class="mx-auto h-24 w-24 text-gray-400"/>
                </div>
                <h1 class="mb-4 text-4xl font-bold text-gray-900 dark:text-gray-100">
                    "Under Maintenance"
                </h1>
                <p class="mb-8 text-lg text-gray-600 dark:text-gray-400">
                    "We're currently performing scheduled maintenance. We'll be back shortly!"
                </p>
                <p class="text-sm text-gray-500 dark:text-gray-500">"Thank you for your patience."</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn title_embeds_site_title() {
        assert_eq!(
            page_title(&SiteMetadata::new("Acme")),
            "Maintenance Mode - Acme"
        );
    }

    #[test]
    fn missing_title_leaves_empty_segment() {
        assert_eq!(page_title(&SiteMetadata::default()), "Maintenance Mode - ");
    }

    #[cfg(feature = "ssr")]
    mod render {
        use super::*;

        /// Remove hydration keys and marker comments, they count up across
        /// renders on the same thread
        fn strip_hydration(html: &str) -> String {
            let html = strip_between(html, " data-hk=\"", "\"");
            strip_between(&html, "<!--", "-->")
        }

        fn strip_between(html: &str, open: &str, close: &str) -> String {
            let mut out = String::with_capacity(html.len());
            let mut rest = html;
            while let Some(start) = rest.find(open) {
                out.push_str(&rest[..start]);
                let after = &rest[start + open.len()..];
                rest = match after.find(close) {
                    Some(end) => &after[end + close.len()..],
                    None => "",
                };
            }
            out.push_str(rest);
            out
        }

        /// Returns (head, body)
        fn render(title: &str) -> (String, String) {
            let runtime = create_runtime();
            provide_meta_context();
            let metadata = SiteMetadata::new(title);
            let body = view! { <MaintenanceNotice metadata=metadata/> }
                .into_view()
                .render_to_string()
                .to_string();
            let head = use_head().dehydrate();
            runtime.dispose();
            (strip_hydration(&head), strip_hydration(&body))
        }

        #[test]
        fn head_has_title_and_noindex() {
            let (head, _) = render("Acme");
            assert!(head.contains("<title>Maintenance Mode - Acme</title>"));
            assert!(head.contains(r#"name="robots""#));
            assert!(head.contains(r#"content="noindex""#));
        }

        #[test]
        fn noindex_without_title() {
            let (head, _) = render("");
            assert!(head.contains("<title>Maintenance Mode - </title>"));
            assert!(head.contains(r#"content="noindex""#));
        }

        #[test]
        fn body_has_notice_text() {
            let (_, body) = render("Acme");
            assert!(body.contains("Under Maintenance"));
            assert!(body.contains("scheduled maintenance"));
            assert!(body.contains("Thank you for your patience."));
            assert!(body.contains("<svg"));
            // the title only goes to <head>
            assert!(!body.contains("Acme"));
        }

        #[test]
        fn same_title_renders_identically() {
            assert_eq!(render("Acme"), render("Acme"));
        }

        #[test]
        fn titles_only_change_head_title() {
            let (head_a, body_a) = render("Acme");
            let (head_b, body_b) = render("Globex");
            assert_ne!(head_a, head_b);
            assert_eq!(head_a.replace("Acme", "Globex"), head_b);
            assert_eq!(body_a, body_b);
        }
    }
}
