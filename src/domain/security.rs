//! Exchange-traded security holding (stock, bond or ETF).

use crate::domain::{AssetId, Currency, Decimal, DividendFrequency, SecurityKind, Ticker};
use serde::{Deserialize, Serialize};

/// A position in an exchange-traded security.
///
/// Prices are denominated in `currency`; `expected_dividend` is an annual
/// percentage yield on the current price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    pub id: AssetId,
    pub name: String,
    pub ticker: Ticker,
    #[serde(rename = "type")]
    pub kind: SecurityKind,
    pub current_price: Decimal,
    pub previous_price: Decimal,
    pub quantity: u32,
    pub expected_dividend: Decimal,
    pub dividend_frequency: DividendFrequency,
    #[serde(default)]
    pub currency: Currency,
}

impl Security {
    /// Market value in the security's own currency.
    pub fn market_value(&self) -> Decimal {
        self.current_price * Decimal::from(self.quantity)
    }
}
