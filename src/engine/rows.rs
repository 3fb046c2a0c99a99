//! Per-asset computed fields for tabular display.
//!
//! Each row wraps the original record (flattened on serialization) together
//! with the figures derived from it. Native-currency figures stay in the
//! record's own currency; `*_in_reporting_currency` fields are converted.

use super::accrual::{deposit_accrued_gain, deposit_current_value, deposit_monthly_income};
use super::currency::convert;
use super::income::{
    crypto_monthly_staking_income, price_change, price_change_percent,
    real_estate_annual_rental, real_estate_monthly_rental, real_estate_rental_yield,
    security_monthly_dividend, security_period_dividend, RentalYield,
};
use crate::domain::{Crypto, Currency, Decimal, Deposit, ExchangeRateSnapshot, RealEstate, Security};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityRow {
    #[serde(flatten)]
    pub security: Security,
    pub price_change: Decimal,
    pub price_change_percent: Decimal,
    pub market_value: Decimal,
    pub period_dividend: Decimal,
    pub monthly_dividend: Decimal,
    pub value_in_reporting_currency: Decimal,
}

impl SecurityRow {
    pub fn new(security: &Security, rates: &ExchangeRateSnapshot) -> Self {
        let market_value = security.market_value();
        Self {
            price_change: price_change(security.current_price, security.previous_price),
            price_change_percent: price_change_percent(
                security.current_price,
                security.previous_price,
            ),
            market_value,
            period_dividend: security_period_dividend(security),
            monthly_dividend: security_monthly_dividend(security),
            value_in_reporting_currency: convert(market_value, security.currency, rates),
            security: security.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateRow {
    #[serde(flatten)]
    pub property: RealEstate,
    pub annual_rental: Decimal,
    pub monthly_rental: Decimal,
    pub rental_yield: RentalYield,
    /// Gain over purchase price; zero without one.
    pub gain: Decimal,
    pub gain_percent: Decimal,
}

impl RealEstateRow {
    pub fn new(property: &RealEstate) -> Self {
        let (gain, gain_percent) = match property.purchase_price {
            Some(purchase) => (
                property.current_value - purchase,
                price_change_percent(property.current_value, purchase),
            ),
            None => (Decimal::zero(), Decimal::zero()),
        };
        Self {
            annual_rental: real_estate_annual_rental(property),
            monthly_rental: real_estate_monthly_rental(property),
            rental_yield: real_estate_rental_yield(property),
            gain,
            gain_percent,
            property: property.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRow {
    #[serde(flatten)]
    pub deposit: Deposit,
    pub current_value: Decimal,
    pub accrued_gain: Decimal,
    pub monthly_income: Decimal,
    pub value_in_reporting_currency: Decimal,
}

impl DepositRow {
    pub fn new(deposit: &Deposit, rates: &ExchangeRateSnapshot, as_of: NaiveDate) -> Self {
        let current_value = deposit_current_value(deposit, as_of);
        Self {
            current_value,
            accrued_gain: deposit_accrued_gain(deposit, as_of),
            monthly_income: deposit_monthly_income(deposit),
            value_in_reporting_currency: convert(current_value, deposit.currency, rates),
            deposit: deposit.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoRow {
    #[serde(flatten)]
    pub crypto: Crypto,
    pub price_change: Decimal,
    pub price_change_percent: Decimal,
    /// Market value in USD.
    pub market_value: Decimal,
    /// Monthly staking reward in USD.
    pub monthly_staking_income: Decimal,
    /// Gain over purchase price in USD; zero without one.
    pub purchase_gain: Decimal,
    pub purchase_gain_percent: Decimal,
    pub value_in_reporting_currency: Decimal,
}

impl CryptoRow {
    pub fn new(crypto: &Crypto, rates: &ExchangeRateSnapshot) -> Self {
        let market_value = crypto.market_value();
        let (purchase_gain, purchase_gain_percent) = match crypto.purchase_price {
            Some(purchase) => (
                (crypto.current_price - purchase) * crypto.amount,
                price_change_percent(crypto.current_price, purchase),
            ),
            None => (Decimal::zero(), Decimal::zero()),
        };
        Self {
            price_change: price_change(crypto.current_price, crypto.previous_price),
            price_change_percent: price_change_percent(crypto.current_price, crypto.previous_price),
            market_value,
            monthly_staking_income: crypto_monthly_staking_income(crypto),
            purchase_gain,
            purchase_gain_percent,
            value_in_reporting_currency: convert(market_value, Currency::Usd, rates),
            crypto: crypto.clone(),
        }
    }
}
