//! Portfolio snapshot and the data-model invariant checks callers run before
//! handing it to the engine.

use crate::domain::{AssetId, Crypto, Decimal, Deposit, RealEstate, Security};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four asset collections owned by the caller.
///
/// Order matters only for display; every computation reads it immutably.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default)]
    pub securities: Vec<Security>,
    #[serde(default)]
    pub real_estate: Vec<RealEstate>,
    #[serde(default)]
    pub deposits: Vec<Deposit>,
    #[serde(default, alias = "cryptocurrencies")]
    pub cryptos: Vec<Crypto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{asset} {id}: {field} must be at least 1")]
    BelowOne {
        asset: &'static str,
        id: AssetId,
        field: &'static str,
    },
    #[error("{asset} {id}: {field} must not be negative, got {value}")]
    Negative {
        asset: &'static str,
        id: AssetId,
        field: &'static str,
        value: Decimal,
    },
    #[error("{asset} {id}: {field} must be positive, got {value}")]
    NotPositive {
        asset: &'static str,
        id: AssetId,
        field: &'static str,
        value: Decimal,
    },
}

fn non_negative(
    asset: &'static str,
    id: AssetId,
    field: &'static str,
    value: Decimal,
) -> Result<(), ValidationError> {
    if value.is_negative() {
        return Err(ValidationError::Negative {
            asset,
            id,
            field,
            value,
        });
    }
    Ok(())
}

fn optional_non_negative(
    asset: &'static str,
    id: AssetId,
    field: &'static str,
    value: Option<Decimal>,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => non_negative(asset, id, field, v),
        None => Ok(()),
    }
}

impl Portfolio {
    pub fn is_empty(&self) -> bool {
        self.securities.is_empty()
            && self.real_estate.is_empty()
            && self.deposits.is_empty()
            && self.cryptos.is_empty()
    }

    /// Check every record against the data-model invariants.
    ///
    /// Returns the first violation found, scanning securities, real estate,
    /// deposits and cryptos in that order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for s in &self.securities {
            if s.quantity < 1 {
                return Err(ValidationError::BelowOne {
                    asset: "security",
                    id: s.id,
                    field: "quantity",
                });
            }
            non_negative("security", s.id, "currentPrice", s.current_price)?;
            non_negative("security", s.id, "previousPrice", s.previous_price)?;
            non_negative("security", s.id, "expectedDividend", s.expected_dividend)?;
        }

        for p in &self.real_estate {
            non_negative("real estate", p.id, "currentValue", p.current_value)?;
            optional_non_negative("real estate", p.id, "purchasePrice", p.purchase_price)?;
            optional_non_negative(
                "real estate",
                p.id,
                "expectedRentalYield",
                p.expected_rental_yield,
            )?;
            optional_non_negative("real estate", p.id, "monthlyRent", p.monthly_rent)?;
        }

        for d in &self.deposits {
            non_negative("deposit", d.id, "amount", d.amount)?;
            non_negative("deposit", d.id, "interestRate", d.interest_rate)?;
        }

        for c in &self.cryptos {
            if !c.amount.is_positive() {
                return Err(ValidationError::NotPositive {
                    asset: "crypto",
                    id: c.id,
                    field: "amount",
                    value: c.amount,
                });
            }
            non_negative("crypto", c.id, "currentPrice", c.current_price)?;
            non_negative("crypto", c.id, "previousPrice", c.previous_price)?;
            optional_non_negative("crypto", c.id, "stakingYield", c.staking_yield)?;
            optional_non_negative("crypto", c.id, "purchasePrice", c.purchase_price)?;
        }

        Ok(())
    }
}
