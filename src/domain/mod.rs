//! Domain types for the portfolio engine.
//!
//! This module provides:
//! - Lossless numeric handling via the Decimal wrapper
//! - Identifiers, instrument codes, currencies and asset enums
//! - The four asset records and the Portfolio snapshot that groups them
//! - The exchange-rate snapshot consumed by every conversion
//! - Per-class update requests and invariant validation

pub mod crypto;
pub mod decimal;
pub mod deposit;
pub mod portfolio;
pub mod primitives;
pub mod rates;
pub mod real_estate;
pub mod security;
pub mod updates;

pub use crypto::Crypto;
pub use decimal::Decimal;
pub use deposit::Deposit;
pub use portfolio::{Portfolio, ValidationError};
pub use primitives::{
    AssetId, Capitalization, Currency, DepositType, DividendFrequency, PropertyKind,
    SecurityKind, Symbol, Ticker,
};
pub use rates::ExchangeRateSnapshot;
pub use real_estate::RealEstate;
pub use security::Security;
pub use updates::{CryptoUpdate, DepositUpdate, RealEstateUpdate, SecurityUpdate, UpdateError};
