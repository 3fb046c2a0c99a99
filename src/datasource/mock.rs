//! Mock providers for testing without network calls.

use super::{CryptoQuote, DataSourceError, QuoteProvider, RateProvider, SecurityQuote};
use crate::domain::{ExchangeRateSnapshot, Symbol, Ticker};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock quote provider that returns predefined quotes.
#[derive(Debug, Clone, Default)]
pub struct MockQuoteProvider {
    securities: HashMap<Ticker, SecurityQuote>,
    cryptos: HashMap<Symbol, CryptoQuote>,
    failing_tickers: HashSet<Ticker>,
    failing_symbols: HashSet<Symbol>,
    fail_all: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl MockQuoteProvider {
    /// Create a new mock provider that knows no instruments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider whose every lookup fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_all: Some(message.into()),
            ..Self::default()
        }
    }

    /// Add a security quote, keyed by its ticker.
    pub fn with_security_quote(mut self, quote: SecurityQuote) -> Self {
        self.securities.insert(quote.ticker.clone(), quote);
        self
    }

    /// Add a crypto quote, keyed by its symbol.
    pub fn with_crypto_quote(mut self, quote: CryptoQuote) -> Self {
        self.cryptos.insert(quote.symbol.clone(), quote);
        self
    }

    /// Make lookups for one ticker fail with a network error.
    pub fn with_failing_ticker(mut self, ticker: Ticker) -> Self {
        self.failing_tickers.insert(ticker);
        self
    }

    /// Make lookups for one symbol fail with a network error.
    pub fn with_failing_symbol(mut self, symbol: Symbol) -> Self {
        self.failing_symbols.insert(symbol);
        self
    }

    /// Number of lookups served so far, across clones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteProvider for MockQuoteProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_security_quote(
        &self,
        ticker: &Ticker,
    ) -> Result<Option<SecurityQuote>, DataSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_all {
            return Err(DataSourceError::Other(message.clone()));
        }
        if self.failing_tickers.contains(ticker) {
            return Err(DataSourceError::NetworkError(format!("{} unreachable", ticker)));
        }
        Ok(self.securities.get(ticker).cloned())
    }

    async fn fetch_crypto_quote(
        &self,
        symbol: &Symbol,
    ) -> Result<Option<CryptoQuote>, DataSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_all {
            return Err(DataSourceError::Other(message.clone()));
        }
        if self.failing_symbols.contains(symbol) {
            return Err(DataSourceError::NetworkError(format!("{} unreachable", symbol)));
        }
        Ok(self.cryptos.get(symbol).cloned())
    }
}

/// Mock rate provider returning a fixed snapshot or a fixed error.
#[derive(Debug, Clone)]
pub struct MockRateProvider {
    result: Result<ExchangeRateSnapshot, DataSourceError>,
}

impl MockRateProvider {
    pub fn new(snapshot: ExchangeRateSnapshot) -> Self {
        Self {
            result: Ok(snapshot),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Err(DataSourceError::NetworkError(message.into())),
        }
    }
}

#[async_trait]
impl RateProvider for MockRateProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_rates(&self) -> Result<ExchangeRateSnapshot, DataSourceError> {
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Decimal;
    use chrono::Utc;

    fn btc_quote() -> CryptoQuote {
        CryptoQuote {
            symbol: Symbol::new("BTC"),
            name: Some("Bitcoin".to_string()),
            price: Decimal::from_str_canonical("65000").unwrap(),
            previous_price: Decimal::from_str_canonical("64000").unwrap(),
        }
    }

    #[tokio::test]
    async fn test_mock_returns_known_quote() {
        let mock = MockQuoteProvider::new().with_crypto_quote(btc_quote());
        let quote = mock.fetch_crypto_quote(&Symbol::new("btc")).await.unwrap();
        assert_eq!(quote, Some(btc_quote()));
    }

    #[tokio::test]
    async fn test_mock_unknown_instrument() {
        let mock = MockQuoteProvider::new();
        let quote = mock.fetch_security_quote(&Ticker::new("YNDX")).await.unwrap();
        assert!(quote.is_none());
    }

    #[tokio::test]
    async fn test_mock_failing_symbol_only() {
        let mock = MockQuoteProvider::new()
            .with_crypto_quote(btc_quote())
            .with_failing_symbol(Symbol::new("ETH"));

        assert!(mock.fetch_crypto_quote(&Symbol::new("ETH")).await.is_err());
        assert!(mock.fetch_crypto_quote(&Symbol::new("BTC")).await.is_ok());
        assert_eq!(mock.call_count(), 2);
    }

    #[test]
    fn test_mock_rate_provider() {
        let snapshot = ExchangeRateSnapshot::fallback(Utc::now());
        let mock = MockRateProvider::new(snapshot);
        assert_eq!(tokio_test::block_on(mock.fetch_rates()), Ok(snapshot));

        let mock = MockRateProvider::failing("timeout");
        assert!(tokio_test::block_on(mock.fetch_rates()).is_err());
    }
}
