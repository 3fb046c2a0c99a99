//! Per-asset-class income and yield figures.
//!
//! Every function is total: a missing optional field or a zero divisor
//! resolves to zero (or to the stored value) instead of failing.

use crate::domain::{Crypto, Decimal, RealEstate, Security};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

const MONTHS_PER_YEAR: Decimal = Decimal::new(dec!(12));

/// Absolute price move.
pub fn price_change(current: Decimal, previous: Decimal) -> Decimal {
    current - previous
}

/// Relative price move in percent. Zero when `previous` is zero.
pub fn price_change_percent(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return Decimal::zero();
    }
    (current - previous).percent_of(previous)
}

fn security_annual_dividend(security: &Security) -> Decimal {
    security.market_value() * security.expected_dividend / Decimal::hundred()
}

/// Dividend paid per payout period of `security.dividend_frequency`.
///
/// Display figure only; aggregation uses [`security_monthly_dividend`].
pub fn security_period_dividend(security: &Security) -> Decimal {
    let periods = Decimal::from(security.dividend_frequency.periods_per_year());
    security_annual_dividend(security) / periods
}

/// Monthly equivalent of the annual dividend, regardless of payout cadence.
pub fn security_monthly_dividend(security: &Security) -> Decimal {
    security_annual_dividend(security) / MONTHS_PER_YEAR
}

/// Annual rental income.
///
/// Monthly rent wins over the stored yield; with neither, the property earns nothing.
pub fn real_estate_annual_rental(property: &RealEstate) -> Decimal {
    if let Some(rent) = property.effective_monthly_rent() {
        return rent * MONTHS_PER_YEAR;
    }
    if let Some(rental_yield) = property.effective_rental_yield() {
        return property.current_value * rental_yield / Decimal::hundred();
    }
    Decimal::zero()
}

/// Contribution of a property to monthly portfolio income.
pub fn real_estate_monthly_rental(property: &RealEstate) -> Decimal {
    real_estate_annual_rental(property) / MONTHS_PER_YEAR
}

/// Where a rental yield figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YieldSource {
    /// Derived from monthly rent and current value; manual override is locked.
    Calculated,
    /// The user-entered `expected_rental_yield`.
    Stored,
    /// Neither rent nor a stored yield is available.
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalYield {
    pub percent: Decimal,
    pub source: YieldSource,
}

impl RentalYield {
    /// True when the figure is derived and the stored yield must not be edited.
    pub fn is_calculated(&self) -> bool {
        self.source == YieldSource::Calculated
    }
}

/// Annual rental yield in percent, tagged with its source.
pub fn real_estate_rental_yield(property: &RealEstate) -> RentalYield {
    match property.effective_monthly_rent() {
        Some(rent) if property.current_value.is_positive() => RentalYield {
            percent: (rent * MONTHS_PER_YEAR).percent_of(property.current_value),
            source: YieldSource::Calculated,
        },
        _ => match property.effective_rental_yield() {
            Some(stored) => RentalYield {
                percent: stored,
                source: YieldSource::Stored,
            },
            None => RentalYield {
                percent: Decimal::zero(),
                source: YieldSource::Absent,
            },
        },
    }
}

/// Annual rental yield in percent.
pub fn real_estate_rental_yield_percent(property: &RealEstate) -> Decimal {
    real_estate_rental_yield(property).percent
}

/// Monthly staking reward in USD. Zero without a staking yield.
pub fn crypto_monthly_staking_income(crypto: &Crypto) -> Decimal {
    match crypto.staking_yield {
        Some(staking_yield) if !staking_yield.is_zero() => {
            crypto.market_value() * staking_yield / Decimal::hundred() / MONTHS_PER_YEAR
        }
        _ => Decimal::zero(),
    }
}
