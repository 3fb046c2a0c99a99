pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;
pub mod snapshot;

pub use config::Config;
pub use datasource::{
    CbrRateProvider, CryptoQuote, DataSourceError, MockQuoteProvider, MockRateProvider,
    QuoteProvider, QuoteProviderChain, RateProvider, RateProviderChain, SecurityQuote,
};
pub use domain::{
    AssetId, Crypto, Currency, Decimal, Deposit, ExchangeRateSnapshot, Portfolio, RealEstate,
    Security, Symbol, Ticker,
};
pub use engine::{AssetClass, AssetClassTotals, Chart, PortfolioAggregator, PortfolioReport};
pub use error::AppError;
pub use orchestration::QuoteRefresher;
pub use snapshot::{load_portfolio, parse_portfolio};
