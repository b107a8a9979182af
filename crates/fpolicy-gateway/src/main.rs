//! fpolicy gateway
//!
//! - Loads `fpolicy.yaml` (strict parsing + validate)
//! - Compiles every policy once at startup
//! - Serves `/` and `/healthz` with the policy headers applied

use tracing_subscriber::{fmt, EnvFilter};

use fpolicy_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "fpolicy-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_from_file("fpolicy.yaml")?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::new(&cfg.policies)?;
    let app = router::build_router(&state);

    tracing::info!(%listen, "fpolicy-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app).await?;
    Ok(())
}
