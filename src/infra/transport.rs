//! Thin asynchronous client for the life cycle cost service.
//!
//! - POSTs the form draft as JSON to `/calculate` under a configurable base URL.
//! - Treats the response payload as opaque; reading fields out of it happens
//!   at the display edges.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{CalculationResult, FormState, DEFAULT_BASE_URL};

const CALCULATE_PATH: &str = "calculate";
const USER_AGENT: &str = concat!("lcc-workbench/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service error: {0}")]
    Api(String),
}

/// How a form draft reaches the costing service. Swapped for stubs under test.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn calculate(&self, request: &FormState) -> Result<CalculationResult, TransportError>;
}

/// Error shape of the service: `{"error": "..."}` with a 4xx status.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base: &str) -> Result<Self, TransportError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn calculate(&self, request: &FormState) -> Result<CalculationResult, TransportError> {
        let url = self.url(CALCULATE_PATH)?;
        tracing::debug!(%url, project = %request.project_name, "posting calculation request");

        let response = self.http.post(url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("calculation service returned HTTP {status}"));
            return Err(TransportError::Api(message));
        }

        let payload = response.json::<serde_json::Value>().await?;
        Ok(CalculationResult::new(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_resolves_the_calculate_endpoint() -> Result<(), TransportError> {
        let transport = HttpTransport::new()?;
        let url = transport.url(CALCULATE_PATH)?;
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/calculate");
        Ok(())
    }

    #[test]
    fn base_with_a_path_keeps_its_prefix() -> Result<(), TransportError> {
        let transport = HttpTransport::with_base_url("http://calc.example:9000/lcc/")?;
        let url = transport.url(CALCULATE_PATH)?;
        assert_eq!(url.as_str(), "http://calc.example:9000/lcc/calculate");
        Ok(())
    }

    #[test]
    fn garbage_base_url_is_rejected() {
        assert!(matches!(
            HttpTransport::with_base_url("not a url"),
            Err(TransportError::InvalidUrl(_))
        ));
    }
}
