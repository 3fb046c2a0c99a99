//! Full reporting view of a portfolio snapshot.

use super::aggregate::{AssetClassTotals, PortfolioAggregator};
use super::chart::{Chart, ChartDataBuilder};
use super::rows::{CryptoRow, DepositRow, RealEstateRow, SecurityRow};
use crate::domain::{Currency, Decimal, ExchangeRateSnapshot, Portfolio};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub as_of: NaiveDate,
    pub reporting_currency: Currency,
    pub rates: ExchangeRateSnapshot,
    pub total_value: Decimal,
    pub total_monthly_income: Decimal,
    pub class_totals: AssetClassTotals,
    pub securities: Vec<SecurityRow>,
    pub real_estate: Vec<RealEstateRow>,
    pub deposits: Vec<DepositRow>,
    pub cryptos: Vec<CryptoRow>,
    pub value_chart: Chart,
    pub income_chart: Chart,
}

impl PortfolioReport {
    pub fn build(portfolio: &Portfolio, rates: &ExchangeRateSnapshot, as_of: NaiveDate) -> Self {
        let class_totals = PortfolioAggregator::new(rates).class_totals(portfolio, as_of);

        Self {
            as_of,
            reporting_currency: Currency::REPORTING,
            rates: *rates,
            total_value: class_totals.total_value(),
            total_monthly_income: class_totals.total_monthly_income(),
            securities: portfolio
                .securities
                .iter()
                .map(|s| SecurityRow::new(s, rates))
                .collect(),
            real_estate: portfolio.real_estate.iter().map(RealEstateRow::new).collect(),
            deposits: portfolio
                .deposits
                .iter()
                .map(|d| DepositRow::new(d, rates, as_of))
                .collect(),
            cryptos: portfolio
                .cryptos
                .iter()
                .map(|c| CryptoRow::new(c, rates))
                .collect(),
            value_chart: ChartDataBuilder::value_chart(&class_totals),
            income_chart: ChartDataBuilder::income_chart(&class_totals),
            class_totals,
        }
    }
}
