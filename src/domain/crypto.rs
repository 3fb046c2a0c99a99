//! Cryptocurrency holding. Prices are always quoted in USD.

use crate::domain::{AssetId, Decimal, Symbol};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crypto {
    pub id: AssetId,
    pub symbol: Symbol,
    pub name: String,
    /// Number of coins held (fractional).
    pub amount: Decimal,
    pub current_price: Decimal,
    pub previous_price: Decimal,
    /// Annual staking reward in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staking_yield: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
}

impl Crypto {
    /// Market value in USD.
    pub fn market_value(&self) -> Decimal {
        self.current_price * self.amount
    }
}
