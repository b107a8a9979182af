//! Operational HTTP endpoints.
//!
//! - `/`        : demo page
//! - `/healthz` : liveness

use axum::{http::StatusCode, response::IntoResponse};

pub async fn index() -> impl IntoResponse {
    "Hello world!"
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
