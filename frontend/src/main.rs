#[cfg(feature = "ssr")]
use anyhow::Result;

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> Result<()> {
    use actix_files::Files;
    use actix_web::{dev::Service, web, App, HttpServer};
    use leptos::{get_configuration, LeptosOptions};
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use maintenance::{
        app::App as Site, config::init_server_config,
        logger::init_tracing_subscriber,
    };

    let config = init_server_config().await?;
    init_tracing_subscriber(config.log_level)?;

    let conf = get_configuration(None).await?;
    let addr = conf.leptos_options.site_addr;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(Site);
    tracing::info!(
        %addr,
        maintenance = config.frontend.maintenance.enabled,
        "listening"
    );

    HttpServer::new(move || {
        let leptos_options: &LeptosOptions = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        let app = App::new()
            .route("/api/{tail:.*}", leptos_actix::handle_server_fns())
            // serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), Site)
            .app_data(web::Data::new(leptos_options.to_owned()))
            .wrap_fn(|req, srv| {
                tracing::debug!(method = %req.method(), path = req.path(), "request");
                srv.call(req)
            });

        #[cfg(feature = "compress")]
        let app = app.wrap(actix_web::middleware::Compress::default());

        app
    })
    .bind(&addr)?
    .run()
    .await?;
    Ok(())
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
    // see optional feature `csr` instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open --features csr`
    use leptos::*;
    use maintenance::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
