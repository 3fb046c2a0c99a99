//! Conversion into the reporting currency.

use crate::domain::{Currency, Decimal, ExchangeRateSnapshot};

/// Convert `amount` denominated in `currency` into the reporting currency.
///
/// RUB passes through unchanged; USD and EUR are multiplied by the snapshot rate.
pub fn convert(amount: Decimal, currency: Currency, rates: &ExchangeRateSnapshot) -> Decimal {
    match currency {
        Currency::Rub => amount,
        Currency::Usd | Currency::Eur => amount * rates.rate_for(currency),
    }
}
