//! Request handlers.

use crate::server::views::IndexPage;
use crate::server::AppState;
use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use tracing::error;

/// `GET /` — the rendered catalog page.
pub async fn index(State(state): State<AppState>) -> Response {
    let page = IndexPage::new(&state.catalog);
    match page.render() {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            error!(error = %err, "failed to render catalog page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `GET /trees.json` — the catalog as JSON.
pub async fn trees_json(State(state): State<AppState>) -> Response {
    Json(state.catalog.as_ref()).into_response()
}
