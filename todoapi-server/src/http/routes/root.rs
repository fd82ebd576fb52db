//! Landing route

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// GET /
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Todo API is running",
        status: "success",
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
