//! # Blog API Server
//!
//! actix-web HTTP layer over the blog post store: configuration, routing,
//! error mapping, telemetry and the server lifecycle.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::{RunningServer, ServerError, run_server};
pub use state::AppState;
