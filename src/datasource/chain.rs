//! Ordered provider lists with a first-success policy.

use super::{
    CryptoQuote, DataSourceError, QuoteProvider, RateProvider, SecurityQuote,
};
use crate::domain::{ExchangeRateSnapshot, Symbol, Ticker};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

/// Tries each quote provider in order; the first `Ok(Some(_))` wins.
///
/// A provider error is logged and the next provider is tried. The chain only
/// returns an error when every provider failed and none answered `Ok(None)`.
#[derive(Debug, Clone, Default)]
pub struct QuoteProviderChain {
    providers: Vec<Arc<dyn QuoteProvider>>,
}

impl QuoteProviderChain {
    pub fn new(providers: Vec<Arc<dyn QuoteProvider>>) -> Self {
        Self { providers }
    }

    pub fn with_provider(mut self, provider: Arc<dyn QuoteProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl QuoteProvider for QuoteProviderChain {
    fn name(&self) -> &str {
        "chain"
    }

    async fn fetch_security_quote(
        &self,
        ticker: &Ticker,
    ) -> Result<Option<SecurityQuote>, DataSourceError> {
        let mut last_error = None;
        let mut any_answered = false;
        for provider in &self.providers {
            match provider.fetch_security_quote(ticker).await {
                Ok(Some(quote)) => {
                    debug!("Quote for {} from {}", ticker, provider.name());
                    return Ok(Some(quote));
                }
                Ok(None) => any_answered = true,
                Err(e) => {
                    warn!("{} failed for {}: {}", provider.name(), ticker, e);
                    last_error = Some(e);
                }
            }
        }
        match last_error {
            Some(e) if !any_answered => Err(e),
            _ => Ok(None),
        }
    }

    async fn fetch_crypto_quote(
        &self,
        symbol: &Symbol,
    ) -> Result<Option<CryptoQuote>, DataSourceError> {
        let mut last_error = None;
        let mut any_answered = false;
        for provider in &self.providers {
            match provider.fetch_crypto_quote(symbol).await {
                Ok(Some(quote)) => {
                    debug!("Quote for {} from {}", symbol, provider.name());
                    return Ok(Some(quote));
                }
                Ok(None) => any_answered = true,
                Err(e) => {
                    warn!("{} failed for {}: {}", provider.name(), symbol, e);
                    last_error = Some(e);
                }
            }
        }
        match last_error {
            Some(e) if !any_answered => Err(e),
            _ => Ok(None),
        }
    }
}

/// Tries each rate provider in order and falls back to fixed rates when all fail.
#[derive(Debug, Clone)]
pub struct RateProviderChain {
    providers: Vec<Arc<dyn RateProvider>>,
    fallback: ExchangeRateSnapshot,
}

impl RateProviderChain {
    pub fn new(providers: Vec<Arc<dyn RateProvider>>, fallback: ExchangeRateSnapshot) -> Self {
        Self {
            providers,
            fallback,
        }
    }

    /// Never fails: returns the first provider's snapshot, or the fallback
    /// rates stamped with the current time.
    pub async fn fetch_rates_or_fallback(&self) -> ExchangeRateSnapshot {
        for provider in &self.providers {
            match provider.fetch_rates().await {
                Ok(snapshot) => {
                    debug!(
                        "Exchange rates from {}: USD={} EUR={}",
                        provider.name(),
                        snapshot.usd_rub,
                        snapshot.eur_rub
                    );
                    return snapshot;
                }
                Err(e) => warn!("Rate provider {} failed: {}", provider.name(), e),
            }
        }
        warn!("All exchange rate providers failed, using fallback rates");
        ExchangeRateSnapshot {
            fetched_at: Utc::now(),
            ..self.fallback
        }
    }
}
