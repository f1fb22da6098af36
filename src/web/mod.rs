//! HTML front end over the registry client.

pub mod error;
pub mod handlers;
mod templates;

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Configuration;
use crate::v2;
use error::WebError;

/// Shared application state, cloned into every handler.
///
/// Holds the read-only pieces built at startup: the registry client (with
/// its connection pool), the registry display name and the parsed template
/// set.
#[derive(Clone)]
pub struct AppState {
    pub client: v2::Client,
    pub registry: String,
    tera: Arc<tera::Tera>,
}

impl AppState {
    pub fn new(client: v2::Client, registry: String) -> Result<Self, tera::Error> {
        Ok(Self {
            client,
            registry,
            tera: Arc::new(templates::build()?),
        })
    }

    fn render(&self, name: &str, ctx: &tera::Context) -> Result<Html<String>, WebError> {
        Ok(Html(self.tera.render(name, ctx)?))
    }
}

/// Assemble the router over the application state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/repositories", get(handlers::list_repositories))
        .route(
            "/repositories/{repository}/tags",
            get(handlers::list_repository_tags),
        )
        .route(
            "/repositories/{repository}/tags/{tag}",
            get(handlers::show_repository_tag_details),
        )
        .route("/static/{*path}", get(handlers::static_asset))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serve the front end until SIGINT.
///
/// On shutdown, in-flight connections get `server.graceful_timeout_ms` to
/// drain before the process stops waiting for them.
pub async fn run(config: &Configuration, state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_millis(config.server.graceful_timeout_ms);

    let listener = TcpListener::bind(&addr).await?;
    info!("now serving at http://{}", addr);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(
        axum::serve(listener, app(state))
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .into_future(),
    );

    tokio::signal::ctrl_c().await?;
    info!("shutdown signal received, draining connections");
    let _ = shutdown_tx.send(());

    match tokio::time::timeout(grace, server).await {
        Ok(joined) => joined??,
        Err(_) => warn!("graceful shutdown timed out after {:?}", grace),
    }

    info!("shutting down registry-gui");
    Ok(())
}
