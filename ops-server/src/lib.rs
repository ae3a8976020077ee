//! Forno Ops Server - pizzeria operations backend
//!
//! # Architecture
//!
//! Single-node HTTP server backing a pizzeria storefront and its staff
//! dashboard:
//!
//! - **Orders** (`orders`): checkout, lifecycle transitions, finalization
//! - **Pricing** (`pricing`): decimal money math, coupons, order totals
//! - **Database** (`db`): embedded SurrealDB storage
//! - **Notifications** (`notify`): WhatsApp texts for customers and couriers
//! - **HTTP API** (`api`): RESTful endpoints
//!
//! # Module layout
//!
//! ```text
//! ops-server/src/
//! ├── core/          # Config, state, server runner
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Models and repositories
//! ├── orders/        # Lifecycle rules and order service
//! ├── pricing/       # Money, coupons, totals
//! ├── notify/        # Phone normalization, message texts, WhatsApp
//! ├── pix/           # BR Code (PIX copia-e-cola) payloads
//! ├── services/      # HTTP server assembly
//! └── utils/         # Logging, dates, shared error re-exports
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod notify;
pub mod orders;
pub mod pix;
pub mod pricing;
pub mod services;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use notify::{Notifier, NullNotifier};
pub use orders::OrderService;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepare the process environment: .env, work dir, logging.
///
/// Call once at startup, before `Config::from_env` consumers run.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let log_level = if config.is_production() {
        "info"
    } else {
        "debug"
    };
    let logs_dir = config.logs_dir();
    init_logger_with_file(Some(log_level), logs_dir.to_str());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______
   / ____/___  _________  ____
  / /_  / __ \/ ___/ __ \/ __ \
 / __/ / /_/ / /  / / / / /_/ /
/_/    \____/_/  /_/ /_/\____/
    "#
    );
}
