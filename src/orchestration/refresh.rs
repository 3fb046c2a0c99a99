use crate::datasource::{CryptoQuote, DataSourceError, QuoteProvider, SecurityQuote};
use crate::domain::{Crypto, Portfolio, Security, Symbol, Ticker};
use futures::future::join_all;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum RefreshError {
    /// Every lookup errored. `first` is the error of the first instrument in
    /// lookup order: securities before cryptocurrencies, each sorted by ticker
    /// or symbol.
    #[error("All {attempted} quote lookups failed, first error: {first}")]
    AllLookupsFailed {
        attempted: usize,
        first: DataSourceError,
    },
}

/// Pulls fresh quotes for every instrument in a portfolio.
///
/// Lookups run concurrently, one per distinct ticker or symbol. A failed
/// lookup leaves its holdings untouched; it never aborts the batch.
#[derive(Debug, Clone)]
pub struct QuoteRefresher {
    provider: Arc<dyn QuoteProvider>,
}

struct Batch<K, Q> {
    quotes: HashMap<K, Q>,
    attempted: usize,
    errors: Vec<DataSourceError>,
}

impl QuoteRefresher {
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }

    pub async fn fetch_security_quotes(&self, tickers: &[Ticker]) -> HashMap<Ticker, SecurityQuote> {
        self.security_batch(tickers).await.quotes
    }

    pub async fn fetch_crypto_quotes(&self, symbols: &[Symbol]) -> HashMap<Symbol, CryptoQuote> {
        self.crypto_batch(symbols).await.quotes
    }

    /// Returns a copy of `portfolio` with current quotes applied.
    ///
    /// Fails only when there was something to look up and every lookup errored.
    pub async fn refresh(&self, portfolio: &Portfolio) -> Result<Portfolio, RefreshError> {
        let tickers: Vec<Ticker> = portfolio.securities.iter().map(|s| s.ticker.clone()).collect();
        let symbols: Vec<Symbol> = portfolio.cryptos.iter().map(|c| c.symbol.clone()).collect();

        let (securities, cryptos) =
            futures::join!(self.security_batch(&tickers), self.crypto_batch(&symbols));

        let attempted = securities.attempted + cryptos.attempted;
        let failed = securities.errors.len() + cryptos.errors.len();
        if failed == attempted {
            // Non-empty exactly when something was looked up.
            if let Some(first) = securities.errors.first().or(cryptos.errors.first()) {
                return Err(RefreshError::AllLookupsFailed {
                    attempted,
                    first: first.clone(),
                });
            }
        }

        info!(
            "Refreshed {} of {} security quotes and {} of {} crypto quotes",
            securities.quotes.len(),
            securities.attempted,
            cryptos.quotes.len(),
            cryptos.attempted
        );

        Ok(Portfolio {
            securities: apply_security_quotes(&portfolio.securities, &securities.quotes),
            real_estate: portfolio.real_estate.clone(),
            deposits: portfolio.deposits.clone(),
            cryptos: apply_crypto_quotes(&portfolio.cryptos, &cryptos.quotes),
        })
    }

    async fn security_batch(&self, tickers: &[Ticker]) -> Batch<Ticker, SecurityQuote> {
        let distinct: BTreeSet<&Ticker> = tickers.iter().filter(|t| !t.is_empty()).collect();
        let results = join_all(distinct.iter().map(|ticker| async move {
            (*ticker, self.provider.fetch_security_quote(ticker).await)
        }))
        .await;

        let mut batch = Batch {
            quotes: HashMap::new(),
            attempted: results.len(),
            errors: Vec::new(),
        };
        for (ticker, result) in results {
            match result {
                Ok(Some(quote)) if quote.price.is_positive() => {
                    batch.quotes.insert(ticker.clone(), quote);
                }
                Ok(Some(quote)) => {
                    warn!("Ignoring non-positive price {} for {}", quote.price, ticker)
                }
                Ok(None) => debug!("No quote for {}", ticker),
                Err(e) => {
                    warn!("Quote lookup for {} failed: {}", ticker, e);
                    batch.errors.push(e);
                }
            }
        }
        batch
    }

    async fn crypto_batch(&self, symbols: &[Symbol]) -> Batch<Symbol, CryptoQuote> {
        let distinct: BTreeSet<&Symbol> = symbols.iter().filter(|s| !s.is_empty()).collect();
        let results = join_all(distinct.iter().map(|symbol| async move {
            (*symbol, self.provider.fetch_crypto_quote(symbol).await)
        }))
        .await;

        let mut batch = Batch {
            quotes: HashMap::new(),
            attempted: results.len(),
            errors: Vec::new(),
        };
        for (symbol, result) in results {
            match result {
                Ok(Some(quote)) if quote.price.is_positive() => {
                    batch.quotes.insert(symbol.clone(), quote);
                }
                Ok(Some(quote)) => {
                    warn!("Ignoring non-positive price {} for {}", quote.price, symbol)
                }
                Ok(None) => debug!("No quote for {}", symbol),
                Err(e) => {
                    warn!("Quote lookup for {} failed: {}", symbol, e);
                    batch.errors.push(e);
                }
            }
        }
        batch
    }
}

/// Apply quotes to securities, returning new records.
///
/// The previous price follows the quote's previous close only when the stored
/// previous price carries no information (zero, or equal to the current price);
/// otherwise the old current price becomes the previous price.
pub fn apply_security_quotes(
    securities: &[Security],
    quotes: &HashMap<Ticker, SecurityQuote>,
) -> Vec<Security> {
    securities
        .iter()
        .map(|security| match quotes.get(&security.ticker) {
            Some(quote) => apply_security_quote(security, quote),
            None => security.clone(),
        })
        .collect()
}

fn apply_security_quote(security: &Security, quote: &SecurityQuote) -> Security {
    let stale_previous = security.previous_price == security.current_price
        || security.previous_price.is_zero();
    let previous_price = if stale_previous {
        quote.previous_close
    } else {
        security.current_price
    };

    let mut updated = security.clone();
    updated.current_price = quote.price;
    updated.previous_price = previous_price;
    if let Some(dividend_yield) = quote.dividend_yield {
        updated.expected_dividend = dividend_yield;
    }
    if let Some(frequency) = quote.dividend_frequency {
        updated.dividend_frequency = frequency;
    }
    if let Some(name) = quote.name.as_ref().filter(|n| !n.is_empty()) {
        updated.name = name.clone();
    }
    if let Some(currency) = quote.currency {
        updated.currency = currency;
    }
    updated
}

pub fn apply_crypto_quotes(cryptos: &[Crypto], quotes: &HashMap<Symbol, CryptoQuote>) -> Vec<Crypto> {
    cryptos
        .iter()
        .map(|crypto| {
            let Some(quote) = quotes.get(&crypto.symbol) else {
                return crypto.clone();
            };
            let mut updated = crypto.clone();
            updated.previous_price = crypto.current_price;
            updated.current_price = quote.price;
            if let Some(name) = quote.name.as_ref().filter(|n| !n.is_empty()) {
                updated.name = name.clone();
            }
            updated
        })
        .collect()
}
