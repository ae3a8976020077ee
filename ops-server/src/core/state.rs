use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::notify::{Notifier, NullNotifier, WhatsAppNotifier};

/// Shared state handed to every request handler
///
/// Cloning is shallow; the database handle and the notifier are shared
/// references.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Outbound text sender
    pub notifier: Arc<dyn Notifier>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config,
            db,
            notifier,
        }
    }

    /// Initialize the server state
    ///
    /// Creates the working directory tree, opens the embedded database
    /// at `{work_dir}/db/forno.db` and wires the notifier (WhatsApp
    /// gateway when configured, otherwise a logging null sender).
    ///
    /// # Panics
    ///
    /// Panics when the working directory or the database cannot be
    /// initialized; the server cannot run without either.
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("forno.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        let notifier: Arc<dyn Notifier> = match &config.whatsapp_api_url {
            Some(url) => {
                tracing::info!(gateway = %url, "WhatsApp notifier enabled");
                Arc::new(WhatsAppNotifier::new(
                    url.clone(),
                    config.whatsapp_api_token.clone(),
                ))
            }
            None => {
                tracing::info!("No WhatsApp gateway configured, outbound texts will be dropped");
                Arc::new(NullNotifier)
            }
        };

        Self::new(config.clone(), db_service.db, notifier)
    }
}
