//! Market-data abstraction: price quotes for securities and cryptocurrencies,
//! and exchange rates into the reporting currency.
//!
//! Providers sit outside the computation engine. The engine only ever sees the
//! quotes and rate snapshots they produce.

use crate::domain::{Currency, Decimal, DividendFrequency, ExchangeRateSnapshot, Symbol, Ticker};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod cbr;
pub mod chain;
pub mod mock;

pub use cbr::CbrRateProvider;
pub use chain::{QuoteProviderChain, RateProviderChain};
pub use mock::{MockQuoteProvider, MockRateProvider};

/// Latest market data for a security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityQuote {
    pub ticker: Ticker,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub price: Decimal,
    pub previous_close: Decimal,
    /// Annual dividend yield in percent, when the provider reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_frequency: Option<DividendFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

/// Latest market data for a cryptocurrency, priced in USD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoQuote {
    pub symbol: Symbol,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub price: Decimal,
    pub previous_price: Decimal,
}

/// Source of instrument prices.
///
/// `Ok(None)` means the provider does not know the instrument; `Err` means the
/// lookup itself failed.
#[async_trait]
pub trait QuoteProvider: Send + Sync + fmt::Debug {
    /// Short provider name for logs.
    fn name(&self) -> &str;

    async fn fetch_security_quote(
        &self,
        ticker: &Ticker,
    ) -> Result<Option<SecurityQuote>, DataSourceError>;

    async fn fetch_crypto_quote(
        &self,
        symbol: &Symbol,
    ) -> Result<Option<CryptoQuote>, DataSourceError>;
}

/// Source of USD/EUR rates into the reporting currency.
#[async_trait]
pub trait RateProvider: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    async fn fetch_rates(&self) -> Result<ExchangeRateSnapshot, DataSourceError>;
}

/// Error type for data source operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    /// Network error (e.g., connection timeout, DNS failure)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error (e.g., 429 rate limit, 5xx server error)
    #[error("HTTP error {status}: {message}")]
    HttpError { status: u16, message: String },
    /// Parsing error (invalid JSON or malformed response)
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Rate limit exceeded (caller should implement backoff)
    #[error("Rate limited")]
    RateLimited,
    #[error("Error: {0}")]
    Other(String),
}
