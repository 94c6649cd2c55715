//! Currency conversion abstractions

use super::error::ExchangeError;
use super::request::ConversionRequest;
use async_trait::async_trait;
use chrono::NaiveDate;

/// A converted amount as reported by the upstream API.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub rate: f64,
    pub date: Option<NaiveDate>,
}

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn quote(&self, request: &ConversionRequest) -> Result<Quote, ExchangeError>;

    async fn convert(&self, request: &ConversionRequest) -> Result<f64, ExchangeError> {
        Ok(self.quote(request).await?.rate)
    }
}
