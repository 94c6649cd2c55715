use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::{ConversionRequest, ExchangeError, ExchangeRateProvider, Quote};

pub const DEFAULT_BASE_URL: &str = "https://api.exchangerate.host/latest";

pub const USER_AGENT: &str = concat!("fxconv/", env!("CARGO_PKG_VERSION"));

/// Converts amounts with the exchangerate.host `latest` endpoint.
pub struct ExchangeRateHostProvider {
    base_url: String,
    client: reqwest::Client,
}

impl ExchangeRateHostProvider {
    pub fn new(base_url: &str) -> Result<Self, ExchangeError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Uses a caller-configured client, e.g. one with a request timeout.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        ExchangeRateHostProvider {
            base_url: base_url.to_string(),
            client,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    base: Option<String>,
    date: Option<String>,
    #[serde(default)]
    rates: HashMap<String, serde_json::Value>,
}

#[async_trait]
impl ExchangeRateProvider for ExchangeRateHostProvider {
    #[instrument(
        name = "ExchangeRateFetch",
        skip(self, request),
        fields(base = %request.base, symbols = %request.symbols, source = %request.source)
    )]
    async fn quote(&self, request: &ConversionRequest) -> Result<Quote, ExchangeError> {
        request.validate()?;

        let mut http_request = self.client.get(&self.base_url).build()?;
        http_request
            .url_mut()
            .query_pairs_mut()
            .extend_pairs(request.query());
        debug!("Requesting exchange rate from {}", http_request.url());

        let response = self.client.execute(http_request).await?;
        let status = response.status();
        debug!(%status, "Received exchange rate response");

        if status != StatusCode::OK {
            return Err(ExchangeError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let data: LatestResponse = serde_json::from_str(&text)
            .map_err(|e| ExchangeError::malformed(format!("failed to parse JSON: {e}")))?;
        debug!(?data, "Parsed exchange rate response");

        if data.rates.is_empty() {
            return Err(ExchangeError::malformed("rates not found"));
        }

        let rate = data
            .rates
            .get(&request.symbols)
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| {
                ExchangeError::malformed(format!(
                    "rate for {} not found or not a number",
                    request.symbols
                ))
            })?;

        if let Some(base) = data.base.as_deref()
            && base != request.base
        {
            debug!(requested = %request.base, reported = %base, "API reported a different base");
        }

        let date = data
            .date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());

        Ok(Quote { rate, date })
    }
}
