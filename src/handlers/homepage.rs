use axum::{routing::get, Router};

use crate::{names, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(homepage))
}

async fn homepage() -> &'static str {
    names::GREETING
}
