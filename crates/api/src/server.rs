//! Server startup.

use crate::config::Settings;
use crate::routes::router;
use crate::state::AppState;
use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

/// HTTP server for the quote service.
pub struct ApiServer {
    settings: Settings,
}

impl ApiServer {
    /// Creates a server from validated settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Binds and serves until the process is stopped.
    pub async fn run(self) -> Result<()> {
        let address = self.settings.server.bind_address();
        let state = AppState::new(
            self.settings.pricing,
            self.settings.server.max_metrics_age,
        );

        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {address}"))?;
        info!(%address, "Quote service listening");

        axum::serve(listener, router(state))
            .await
            .context("server error")?;
        Ok(())
    }
}
