//! Per-asset-class update requests.
//!
//! Each request lists exactly the fields the storage layer accepts on update;
//! anything else on the record is immutable after creation. Applying a request
//! returns a new record and leaves the input untouched.

use crate::domain::{Crypto, Decimal, Deposit, RealEstate, Security};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error("No fields to update")]
    NoFields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityUpdate {
    pub current_price: Decimal,
    pub previous_price: Decimal,
    pub quantity: u32,
}

impl SecurityUpdate {
    pub fn apply_to(&self, security: &Security) -> Security {
        Security {
            current_price: self.current_price,
            previous_price: self.previous_price,
            quantity: self.quantity,
            ..security.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Decimal>,
}

impl RealEstateUpdate {
    /// # Errors
    /// Returns [`UpdateError::NoFields`] when no field is set.
    pub fn apply_to(&self, property: &RealEstate) -> Result<RealEstate, UpdateError> {
        let current_value = self.current_value.ok_or(UpdateError::NoFields)?;
        Ok(RealEstate {
            current_value,
            ..property.clone()
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl DepositUpdate {
    /// # Errors
    /// Returns [`UpdateError::NoFields`] when no field is set.
    pub fn apply_to(&self, deposit: &Deposit) -> Result<Deposit, UpdateError> {
        let amount = self.amount.ok_or(UpdateError::NoFields)?;
        Ok(Deposit {
            amount,
            ..deposit.clone()
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoUpdate {
    pub current_price: Decimal,
    pub previous_price: Decimal,
    pub amount: Decimal,
}

impl CryptoUpdate {
    pub fn apply_to(&self, crypto: &Crypto) -> Crypto {
        Crypto {
            current_price: self.current_price,
            previous_price: self.previous_price,
            amount: self.amount,
            ..crypto.clone()
        }
    }
}
