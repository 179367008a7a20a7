use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use primmo_app::{shell, App};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Leptos pages, the cargo-leptos bundle, and the file/404 fallback.
pub(crate) fn create_router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    // The URL path of the generated JS/WASM bundle from cargo-leptos
    let bundle_path = format!("/{}", leptos_options.site_pkg_dir);
    // The filesystem path of the generated JS/WASM bundle from cargo-leptos
    let bundle_filepath = format!(
        "./{}/{}",
        leptos_options.site_root, leptos_options.site_pkg_dir
    );
    info!("Serving pkg dir: {bundle_filepath}");

    Router::new()
        .nest_service(&bundle_path, ServeDir::new(&bundle_filepath))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

pub(crate) async fn start_web(config: ServerConfig) -> Result<(), ServerError> {
    let ServerConfig {
        leptos_options,
        addr,
    } = config;
    let app = create_router(leptos_options);
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("unable to listen for shutdown signal {e}");
        // without a signal handler, run until the process is killed
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    async fn get(path: &str) -> (StatusCode, String) {
        let router = create_router(LeptosOptions::builder().output_name("primmo").build());
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn serves_privacy_policy() {
        let (status, html) = get("/privacy").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("Privacy Policy</h1>").count(), 1);
        assert_eq!(html.matches("Last Updated:").count(), 1);
    }

    #[tokio::test]
    async fn serves_settings() {
        let (status, html) = get("/settings").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("Enable</button>").count(), 1);
    }

    #[tokio::test]
    async fn other_paths_are_not_found() {
        for path in ["/", "/nope"] {
            let (status, html) = get(path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
            assert!(html.contains("Page Not Found"), "{path}");
        }
    }
}
