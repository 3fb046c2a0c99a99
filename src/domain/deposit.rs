//! Bank deposit holding.

use crate::domain::{AssetId, Capitalization, Currency, Decimal, DepositType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bank deposit. `amount` is the principal, `interest_rate` the annual percentage rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    pub id: AssetId,
    pub name: String,
    pub bank: String,
    pub amount: Decimal,
    pub interest_rate: Decimal,
    #[serde(default)]
    pub currency: Currency,
    /// Without an opening date no interest can accrue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<NaiveDate>,
    pub capitalization: Capitalization,
    #[serde(rename = "type")]
    pub deposit_type: DepositType,
}
