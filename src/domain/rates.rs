//! Exchange-rate snapshot used for a single calculation call.

use crate::domain::{Currency, Decimal};
use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// USD and EUR rates into the reporting currency, captured at `fetched_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateSnapshot {
    pub usd_rub: Decimal,
    pub eur_rub: Decimal,
    pub fetched_at: DateTime<Utc>,
}

impl ExchangeRateSnapshot {
    pub const FALLBACK_USD_RUB: Decimal = Decimal::new(dec!(92.50));
    pub const FALLBACK_EUR_RUB: Decimal = Decimal::new(dec!(100.00));

    pub fn new(usd_rub: Decimal, eur_rub: Decimal, fetched_at: DateTime<Utc>) -> Self {
        Self {
            usd_rub,
            eur_rub,
            fetched_at,
        }
    }

    /// Hardcoded rates used when every rate source is unavailable.
    pub fn fallback(fetched_at: DateTime<Utc>) -> Self {
        Self::new(Self::FALLBACK_USD_RUB, Self::FALLBACK_EUR_RUB, fetched_at)
    }

    /// Multiplier from `currency` into the reporting currency.
    pub fn rate_for(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Rub => Decimal::one(),
            Currency::Usd => self.usd_rub,
            Currency::Eur => self.eur_rub,
        }
    }
}
