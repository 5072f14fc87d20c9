//! Static page and stylesheet.

use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const MAIN_CSS: &str = include_str!("../../assets/main.css");

pub(super) fn routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/css/main.css", get(main_css))
        .route("/health", get(health))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn main_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], MAIN_CSS)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": todo_core::ping(),
        "version": todo_core::core_version(),
    }))
}
