use cfg_if::cfg_if;

// boilerplate to run in different modes
cfg_if! {
    if #[cfg(feature = "ssr")] {
        use anyhow::Context;
        use leptos::*;
        use axum::Router;
        use zynor_website::app::*;
        use zynor_website::fallback::file_and_error_handler;
        use leptos_axum::{generate_route_list, LeptosRoutes};
        use tower_http::compression::CompressionLayer;
        use zynor_contact::ContactClientConfig;

        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            simple_logger::init_with_level(log::Level::Info).context("couldn't initialize logging")?;
            let conf = get_configuration(None).await.context("couldn't read leptos configuration")?;
            let leptos_options = conf.leptos_options;
            let addr = leptos_options.site_addr;
            let routes = generate_route_list(App);

            let webhook = ContactClientConfig::from_env().context("invalid contact webhook configuration")?;
            log::info!("contact form posts to {}", webhook.endpoint_url());

            let app = Router::new()
                .leptos_routes_with_context(&leptos_options, routes, move || provide_context(webhook.clone()), App)
                .fallback(file_and_error_handler)
                .with_state(leptos_options)
                .layer(CompressionLayer::new());

            log::info!("listening on http://{}", &addr);
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await
                .context("server exited with an error")?;
            Ok(())
        }
    } else {
        pub fn main() {
            // client-side rendering starts from the `hydrate` export in lib.rs
        }
    }
}
