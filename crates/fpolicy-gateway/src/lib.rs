//! fpolicy gateway library entry.
//!
//! Wires compiled policy headers into an axum stack: strict YAML config,
//! one-time compilation into `AppState`, and a middleware that stamps the
//! headers on every response. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod middleware;
pub mod ops;
pub mod router;
