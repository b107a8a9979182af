//! Axum router wiring.
//!
//! Policy headers wrap every route, including health checks.

use axum::{routing::get, Router};

use crate::{app_state::AppState, middleware, ops};

pub fn build_router(state: &AppState) -> Router {
    let router = Router::new()
        .route("/", get(ops::index))
        .route("/healthz", get(ops::healthz));

    middleware::layer(router, state.policy_headers())
}
