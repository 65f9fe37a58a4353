//! Bond API client.

use bondcalc_core::{BondCalculationResponse, BondForm, BondInputs};
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Path of the calculation endpoint.
pub const CALCULATE_PATH: &str = "/api/v1/bonds/calculate";

const FALLBACK_MESSAGE: &str = "Failed to calculate bond metrics";

/// Client for the Bondcalc REST API.
///
/// Performs no retries; every failure is reported once.
#[derive(Debug, Clone)]
pub struct BondApiClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl BondApiClient {
    /// Creates a client for the given configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        // Validate the base URL up front.
        config.url(CALCULATE_PATH)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(Self { config, http })
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Validates a raw form and submits it.
    ///
    /// A form that fails validation never reaches the network.
    pub async fn submit(&self, form: &BondForm) -> ClientResult<BondCalculationResponse> {
        let inputs = form.validate()?;
        self.calculate_bond(&inputs).await
    }

    /// Posts bond inputs to the calculation endpoint.
    pub async fn calculate_bond(
        &self,
        inputs: &BondInputs,
    ) -> ClientResult<BondCalculationResponse> {
        let url = self.config.url(CALCULATE_PATH)?;
        tracing::debug!("POST {}", url);

        let response = match self.http.post(url).json(inputs).send().await {
            Ok(response) => response,
            Err(err) => {
                let err = ClientError::from(err);
                tracing::warn!("request to {} failed: {:?}", self.config.base_url, err);
                return Err(err);
            }
        };

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let parsed = serde_json::from_slice::<Value>(&body).ok();
            let message = error_message(status, parsed.as_ref());
            tracing::warn!("calculation rejected with {}: {}", status, message);
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("undecodable calculation response: {}", e);
            ClientError::Unexpected(e.to_string())
        })
    }
}

/// User-facing message for a failed response.
///
/// - a string `message` is used verbatim
/// - an array `message` is joined with ", "
/// - a missing or empty `message` (or a body that is not JSON) yields
///   "Server error: <status> <reason>"
/// - any other `message` yields a generic failure message
pub fn error_message(status: StatusCode, body: Option<&Value>) -> String {
    let message = body.and_then(|b| b.get("message")).filter(|m| is_present(m));

    match message {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(_) => FALLBACK_MESSAGE.to_string(),
        None => format!(
            "Server error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default()
        ),
    }
}

// Null, false, zero and empty strings count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
