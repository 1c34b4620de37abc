//! appmeta server - HTTP API for the application metadata catalog
//!
//! Records are exchanged as YAML (JSON bodies are accepted too, being valid
//! YAML). The catalog lives in memory for the lifetime of the process.
//!
//! # API Endpoints
//!
//! - `PUT /create` - validate and store an application record
//! - `POST /search` - partial-match search; empty fields are wildcards
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Request counters
//! - `GET /metadata` - Version and uptime
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
