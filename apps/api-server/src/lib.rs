//! # Scribe API Server
//!
//! Blog post CRUD over HTTP. The binary in `main.rs` and the integration
//! tests both build on the pieces exported here.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::BlogServer;
pub use state::AppState;
