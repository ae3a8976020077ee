//! Service Layer
//!
//! Long-running services owned by the server process.

pub mod http;

pub use http::{HttpService, build_app};
