//! Server Implementation
//!
//! HTTP server startup and shutdown wiring.

use crate::core::{Config, ServerState};
use crate::services::HttpService;
use shared::AppResult;

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (tests build state themselves)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> AppResult<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await,
        };

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        HttpService::new(self.config.clone())
            .start_server(state, shutdown)
            .await?;

        Ok(())
    }
}
