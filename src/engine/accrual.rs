//! Deposit accrual: compounded current value and steady-state monthly income.

use crate::domain::{Capitalization, Decimal, Deposit};
use chrono::{Datelike, NaiveDate};
use rust_decimal_macros::dec;

const MONTHS_PER_YEAR: Decimal = Decimal::new(dec!(12));
const QUARTERS_PER_YEAR: Decimal = Decimal::new(dec!(4));

/// Whole calendar months between `from` and `to`.
///
/// Counts month boundaries only (`year_diff * 12 + month_diff`); the day of
/// month is ignored, so a partial month is never counted. Negative when `to`
/// precedes `from`.
pub fn elapsed_months(from: NaiveDate, to: NaiveDate) -> i64 {
    let years = i64::from(to.year()) - i64::from(from.year());
    let months = i64::from(to.month()) - i64::from(from.month());
    years * 12 + months
}

/// Value of the deposit on `as_of`, including interest accrued under its
/// capitalization policy.
///
/// Returns the principal unchanged when there is no opening date or when no
/// whole month has elapsed. Compounding that leaves the decimal range
/// saturates at `Decimal::max_value()`.
pub fn deposit_current_value(deposit: &Deposit, as_of: NaiveDate) -> Decimal {
    let Some(opening_date) = deposit.opening_date else {
        return deposit.amount;
    };

    let months = elapsed_months(opening_date, as_of);
    if months <= 0 {
        return deposit.amount;
    }
    let months = months.unsigned_abs();

    let annual_rate = deposit.interest_rate / Decimal::hundred();
    let one = Decimal::one();

    match deposit.capitalization {
        Capitalization::Monthly => {
            deposit.amount * (one + annual_rate / MONTHS_PER_YEAR).powu(months)
        }
        Capitalization::Quarterly => {
            deposit.amount * (one + annual_rate / QUARTERS_PER_YEAR).powu(months / 3)
        }
        Capitalization::Yearly => deposit.amount * (one + annual_rate).powu(months / 12),
        Capitalization::None => {
            let elapsed_years = Decimal::from(months as i64) / MONTHS_PER_YEAR;
            deposit.amount * (one + annual_rate * elapsed_years)
        }
    }
}

/// Expected monthly income from the nominal principal.
///
/// Independent of elapsed time. The monthly-capitalization case is one step
/// of monthly compounding; every other policy is annual interest over twelve.
pub fn deposit_monthly_income(deposit: &Deposit) -> Decimal {
    match deposit.capitalization {
        Capitalization::Monthly => {
            let monthly_rate = deposit.interest_rate / MONTHS_PER_YEAR / Decimal::hundred();
            deposit.amount * monthly_rate
        }
        Capitalization::Quarterly | Capitalization::Yearly | Capitalization::None => {
            let annual_interest = deposit.amount * deposit.interest_rate / Decimal::hundred();
            annual_interest / MONTHS_PER_YEAR
        }
    }
}

/// Interest earned so far: accrued value minus principal.
pub fn deposit_accrued_gain(deposit: &Deposit, as_of: NaiveDate) -> Decimal {
    deposit_current_value(deposit, as_of) - deposit.amount
}
