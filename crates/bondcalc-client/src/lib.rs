//! # Bondcalc Client
//!
//! HTTP client for the Bondcalc REST API.
//!
//! - [`ClientConfig`]: base URL and timeout, passed explicitly
//! - [`BondApiClient`]: posts bond inputs and decodes the calculation
//! - [`ClientError`]: failures with the message shown to the user
//!
//! ## Example
//!
//! ```rust,no_run
//! use bondcalc_client::{BondApiClient, ClientConfig};
//! use bondcalc_core::BondDefaults;
//!
//! # async fn run() -> Result<(), bondcalc_client::ClientError> {
//! let client = BondApiClient::new(ClientConfig::new("http://localhost:3000"))?;
//! let response = client.calculate_bond(&BondDefaults::inputs()).await?;
//! println!("YTM: {:.2}%", response.ytm * 100.0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod client;
pub mod config;
pub mod error;

pub use client::{error_message, BondApiClient, CALCULATE_PATH};
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{ClientError, ClientResult, CONNECTION_MESSAGE};
