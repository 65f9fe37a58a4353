//! Bondcalc REST API Server.
//!
//! This crate serves the Bondcalc bond yield calculator over HTTP.
//!
//! ## Endpoints
//!
//! - `GET  /health`
//! - `POST /api/v1/bonds/calculate`
//!
//! ## Usage
//!
//! ```bash
//! # Start server on the default address (127.0.0.1:3000)
//! bondcalc-api-server
//!
//! # Custom host and port, pinned calculation date
//! bondcalc-api-server --host 0.0.0.0 --port 8080 --valuation-date 2026-01-15
//!
//! # Settings from a TOML file, overridden by flags or BONDCALC_* variables
//! bondcalc-api-server --config bondcalc.toml
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::create_router;
pub use state::AppState;
