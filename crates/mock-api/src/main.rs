//! # payment-mock
//!
//! Local mock PayPal/Stripe API plus static test page server.
//!
//! ## Usage
//!
//! ```bash
//! # Optional overrides
//! export HOST=0.0.0.0
//! export STATIC_DIR=./public
//!
//! # Run on the default port (3001) or the one given
//! payment-mock 8000
//! ```

use anyhow::Context;
use mock_api::{handlers, routes, AppConfig, AppState};
use std::io::ErrorKind;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let port_arg = std::env::args().nth(1);
    let config = AppConfig::from_env(port_arg.as_deref())?;
    let addr = config.socket_addr()?;
    let port = config.port;

    print_banner();

    info!("Environment: {}", config.environment);
    info!("Static pages: {}", config.static_dir.display());

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            anyhow::bail!(
                "Port {} is already in use; try another one: payment-mock {}",
                port,
                port.saturating_add(1)
            );
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to bind {}", addr)),
    };

    let app = routes::create_router(AppState::new(config));

    info!("🚀 Payment mock server listening on http://{}", addr);
    info!("🩺 Health: http://{}/health", addr);
    info!("📄 Unified page: http://{}/unified", addr);
    for endpoint in handlers::PAYPAL_ENDPOINTS.iter().chain(handlers::STRIPE_ENDPOINTS) {
        info!("💳 {}", endpoint);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("🛑 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

fn print_banner() {
    println!(
        r#"
  💳 Payment Mock Server
  ━━━━━━━━━━━━━━━━━━━━━━━
  PayPal / Stripe test backend
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
