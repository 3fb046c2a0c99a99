//! Pure computation engine: valuation, income, accrual and chart shares.
//!
//! Nothing in here performs I/O, logs, or mutates its inputs. Every function
//! is total; undefined cases resolve to zero or to the unchanged input value.

pub mod accrual;
pub mod aggregate;
pub mod chart;
pub mod currency;
pub mod income;
pub mod report;
pub mod rows;

pub use accrual::{
    deposit_accrued_gain, deposit_current_value, deposit_monthly_income, elapsed_months,
};
pub use aggregate::{
    total_monthly_income_in_reporting_currency, total_value_in_reporting_currency, AssetClass,
    AssetClassTotals, ClassTotal, PortfolioAggregator,
};
pub use chart::{Chart, ChartDataBuilder, ChartInput, ChartSegment};
pub use currency::convert;
pub use income::{
    crypto_monthly_staking_income, price_change, price_change_percent,
    real_estate_annual_rental, real_estate_monthly_rental, real_estate_rental_yield,
    real_estate_rental_yield_percent, security_monthly_dividend, security_period_dividend,
    RentalYield, YieldSource,
};
pub use report::PortfolioReport;
pub use rows::{CryptoRow, DepositRow, RealEstateRow, SecurityRow};
