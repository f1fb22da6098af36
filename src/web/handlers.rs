//! Request handlers for the HTML front end.
//!
//! Each handler performs 1-3 sequential registry calls through the shared
//! client and renders the result into a template. Registry failures bubble
//! up as [`WebError`] and become per-request error responses.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use tera::Context;
use tracing::debug;

use super::error::WebError;
use super::AppState;

static STYLE_CSS: &[u8] = include_bytes!("../../static/style.css");

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let mut ctx = Context::new();
    ctx.insert("registry", &state.registry);
    state.render("index.html", &ctx)
}

pub async fn list_repositories(
    State(state): State<AppState>,
) -> Result<Html<String>, WebError> {
    let catalog = state.client.get_catalog().await?;

    let mut ctx = Context::new();
    ctx.insert("catalog", &catalog);
    state.render("list-repositories.html", &ctx)
}

pub async fn list_repository_tags(
    State(state): State<AppState>,
    Path(repository): Path<String>,
) -> Result<Html<String>, WebError> {
    let tags = state.client.get_tags(&repository).await?;

    let mut ctx = Context::new();
    ctx.insert("tags", &tags);
    state.render("list-repository-tags.html", &ctx)
}

pub async fn show_repository_tag_details(
    State(state): State<AppState>,
    Path((repository, tag)): Path<(String, String)>,
) -> Result<Html<String>, WebError> {
    // The schema-1 manifest carries the human-facing fields, the schema-2
    // manifest carries the digest needed to fetch the image configuration.
    let manifest_v1 = state.client.get_manifest_schema1(&repository, &tag).await?;
    let manifest_v2 = state.client.get_manifest_schema2(&repository, &tag).await?;
    let config_blob = state
        .client
        .get_config_blob(&repository, manifest_v2.config_digest())
        .await?;

    let mut ctx = Context::new();
    ctx.insert("registry", &state.registry);
    ctx.insert("manifest_v1", &manifest_v1);
    ctx.insert("manifest_v2", &manifest_v2);
    ctx.insert("config_blob", &config_blob);
    state.render("show-repository-tag-details.html", &ctx)
}

pub async fn static_asset(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');
    match asset(path) {
        Some(data) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.to_string())], data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

fn asset(path: &str) -> Option<&'static [u8]> {
    match path {
        "style.css" => Some(STYLE_CSS),
        _ => None,
    }
}

pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    debug!("no route for [{}]", uri.path());

    let mut ctx = Context::new();
    ctx.insert("path", uri.path());
    match state.render("404.html", &ctx) {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(err) => err.into_response(),
    }
}
