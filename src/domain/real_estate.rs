//! Real estate holding. Values are always in the reporting currency.

use crate::domain::{AssetId, Decimal, PropertyKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstate {
    pub id: AssetId,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub current_value: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    /// Annual rental yield in percent, as entered by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_rental_yield: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_rent: Option<Decimal>,
}

impl RealEstate {
    /// Monthly rent when it is set and non-zero.
    ///
    /// A zero rent carries no information and never overrides a stored yield.
    pub fn effective_monthly_rent(&self) -> Option<Decimal> {
        self.monthly_rent.filter(|rent| !rent.is_zero())
    }

    /// Stored rental yield when it is set and non-zero.
    pub fn effective_rental_yield(&self) -> Option<Decimal> {
        self.expected_rental_yield.filter(|y| !y.is_zero())
    }
}
