//! Core Module
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared state
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
