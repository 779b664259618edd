//! Embedded static front end.
//!
//! The `public/` directory is compiled into the binary, so deployment is a
//! single executable with no asset directory to ship alongside it.

use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use rust_embed::Embed;
use serde_json::json;

#[derive(Embed)]
#[folder = "public/"]
struct Assets;

/// `GET /` - the front-end page.
pub async fn index() -> Response {
    asset("index.html").unwrap_or_else(not_found)
}

/// Router fallback: an embedded asset when one matches, the JSON 404
/// otherwise.
pub async fn static_or_404(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    match asset(path) {
        Some(response) => response,
        None => not_found(),
    }
}

fn asset(path: &str) -> Option<Response> {
    let file = Assets::get(path)?;
    let content_type = match path.rsplit('.').next() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    };
    Some(([(header::CONTENT_TYPE, content_type)], file.data.into_owned()).into_response())
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
        .into_response()
}
