//! Portfolio-wide totals in the reporting currency.

use super::accrual::{deposit_current_value, deposit_monthly_income};
use super::currency::convert;
use super::income::{
    crypto_monthly_staking_income, real_estate_monthly_rental, security_monthly_dividend,
};
use crate::domain::{Currency, Decimal, ExchangeRateSnapshot, Portfolio};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four asset classes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetClass {
    Securities,
    RealEstate,
    Deposits,
    Crypto,
}

impl AssetClass {
    pub const ALL: [AssetClass; 4] = [
        AssetClass::Securities,
        AssetClass::RealEstate,
        AssetClass::Deposits,
        AssetClass::Crypto,
    ];

    pub fn value_label(&self) -> &'static str {
        match self {
            AssetClass::Securities => "Securities",
            AssetClass::RealEstate => "Real estate",
            AssetClass::Deposits => "Deposits",
            AssetClass::Crypto => "Crypto",
        }
    }

    pub fn income_label(&self) -> &'static str {
        match self {
            AssetClass::Securities => "Dividends",
            AssetClass::RealEstate => "Rent",
            AssetClass::Deposits => "Deposit interest",
            AssetClass::Crypto => "Staking",
        }
    }

    /// Default chart color for the class.
    pub fn color(&self) -> &'static str {
        match self {
            AssetClass::Securities => "#667eea",
            AssetClass::RealEstate => "#4caf50",
            AssetClass::Deposits => "#ff9800",
            AssetClass::Crypto => "#ef5350",
        }
    }
}

/// Value and monthly income of one asset class, in the reporting currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTotal {
    pub class: AssetClass,
    pub value: Decimal,
    pub monthly_income: Decimal,
}

/// Per-class breakdown; aggregate totals are sums over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetClassTotals {
    pub classes: Vec<ClassTotal>,
}

impl AssetClassTotals {
    pub fn get(&self, class: AssetClass) -> Option<&ClassTotal> {
        self.classes.iter().find(|c| c.class == class)
    }

    pub fn total_value(&self) -> Decimal {
        self.classes.iter().map(|c| c.value).sum()
    }

    pub fn total_monthly_income(&self) -> Decimal {
        self.classes.iter().map(|c| c.monthly_income).sum()
    }
}

/// Sums a portfolio snapshot into reporting-currency figures.
///
/// Deposits are valued as of the date passed to the value methods; everything
/// else is valued at the prices carried on the records.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioAggregator<'a> {
    rates: &'a ExchangeRateSnapshot,
}

impl<'a> PortfolioAggregator<'a> {
    pub fn new(rates: &'a ExchangeRateSnapshot) -> Self {
        Self { rates }
    }

    pub fn class_value(
        &self,
        portfolio: &Portfolio,
        class: AssetClass,
        as_of: NaiveDate,
    ) -> Decimal {
        match class {
            AssetClass::Securities => portfolio
                .securities
                .iter()
                .map(|s| convert(s.market_value(), s.currency, self.rates))
                .sum(),
            // Real estate is already in the reporting currency.
            AssetClass::RealEstate => portfolio.real_estate.iter().map(|p| p.current_value).sum(),
            AssetClass::Deposits => portfolio
                .deposits
                .iter()
                .map(|d| convert(deposit_current_value(d, as_of), d.currency, self.rates))
                .sum(),
            AssetClass::Crypto => portfolio
                .cryptos
                .iter()
                .map(|c| convert(c.market_value(), Currency::Usd, self.rates))
                .sum(),
        }
    }

    pub fn class_monthly_income(&self, portfolio: &Portfolio, class: AssetClass) -> Decimal {
        match class {
            AssetClass::Securities => portfolio
                .securities
                .iter()
                .map(|s| convert(security_monthly_dividend(s), s.currency, self.rates))
                .sum(),
            AssetClass::RealEstate => portfolio
                .real_estate
                .iter()
                .map(real_estate_monthly_rental)
                .sum(),
            AssetClass::Deposits => portfolio
                .deposits
                .iter()
                .map(|d| convert(deposit_monthly_income(d), d.currency, self.rates))
                .sum(),
            AssetClass::Crypto => portfolio
                .cryptos
                .iter()
                .map(|c| convert(crypto_monthly_staking_income(c), Currency::Usd, self.rates))
                .sum(),
        }
    }

    pub fn class_totals(&self, portfolio: &Portfolio, as_of: NaiveDate) -> AssetClassTotals {
        AssetClassTotals {
            classes: AssetClass::ALL
                .iter()
                .map(|&class| ClassTotal {
                    class,
                    value: self.class_value(portfolio, class, as_of),
                    monthly_income: self.class_monthly_income(portfolio, class),
                })
                .collect(),
        }
    }

    pub fn total_value(&self, portfolio: &Portfolio, as_of: NaiveDate) -> Decimal {
        AssetClass::ALL
            .iter()
            .map(|&class| self.class_value(portfolio, class, as_of))
            .sum()
    }

    pub fn total_monthly_income(&self, portfolio: &Portfolio) -> Decimal {
        AssetClass::ALL
            .iter()
            .map(|&class| self.class_monthly_income(portfolio, class))
            .sum()
    }
}

/// Total portfolio value in the reporting currency as of `as_of`.
pub fn total_value_in_reporting_currency(
    portfolio: &Portfolio,
    rates: &ExchangeRateSnapshot,
    as_of: NaiveDate,
) -> Decimal {
    PortfolioAggregator::new(rates).total_value(portfolio, as_of)
}

/// Total expected monthly income in the reporting currency.
pub fn total_monthly_income_in_reporting_currency(
    portfolio: &Portfolio,
    rates: &ExchangeRateSnapshot,
) -> Decimal {
    PortfolioAggregator::new(rates).total_monthly_income(portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AssetId, Capitalization, Crypto, DepositType, Deposit, DividendFrequency, Security,
        SecurityKind, Symbol, Ticker,
    };
    use chrono::{TimeZone, Utc};

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    fn rates() -> ExchangeRateSnapshot {
        ExchangeRateSnapshot::new(
            d("90"),
            d("100"),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_empty_portfolio_totals_are_zero() {
        let portfolio = Portfolio::default();
        let rates = rates();
        assert!(total_value_in_reporting_currency(&portfolio, &rates, as_of()).is_zero());
        assert!(total_monthly_income_in_reporting_currency(&portfolio, &rates).is_zero());
        let totals = PortfolioAggregator::new(&rates).class_totals(&portfolio, as_of());
        assert_eq!(totals.classes.len(), 4);
        assert!(totals.total_value().is_zero());
    }

    #[test]
    fn test_usd_security_is_converted() {
        let portfolio = Portfolio {
            securities: vec![Security {
                id: AssetId::new(),
                name: "Microsoft".to_string(),
                ticker: Ticker::new("MSFT"),
                kind: SecurityKind::Stock,
                current_price: d("400"),
                previous_price: d("390"),
                quantity: 2,
                expected_dividend: d("0.6"),
                dividend_frequency: DividendFrequency::Quarterly,
                currency: Currency::Usd,
            }],
            ..Default::default()
        };
        let rates = rates();
        let agg = PortfolioAggregator::new(&rates);
        assert_eq!(agg.total_value(&portfolio, as_of()), d("72000"));
        // 800 * 0.6% = 4.8 USD/year -> 0.4 USD/month -> 36 RUB
        assert_eq!(agg.total_monthly_income(&portfolio), d("36"));
    }

    #[test]
    fn test_eur_deposit_value_uses_accrued_amount() {
        let portfolio = Portfolio {
            deposits: vec![Deposit {
                id: AssetId::new(),
                name: "EUR term".to_string(),
                bank: "Raiffeisen".to_string(),
                amount: d("1000"),
                interest_rate: d("10"),
                currency: Currency::Eur,
                opening_date: NaiveDate::from_ymd_opt(2023, 1, 1),
                maturity_date: None,
                capitalization: Capitalization::Yearly,
                deposit_type: DepositType::Term,
            }],
            ..Default::default()
        };
        let rates = rates();
        let agg = PortfolioAggregator::new(&rates);
        // 24 months -> 1000 * 1.1^2 = 1210 EUR
        assert_eq!(
            agg.class_value(&portfolio, AssetClass::Deposits, as_of()),
            d("121000")
        );
    }

    #[test]
    fn test_crypto_is_always_usd() {
        let portfolio = Portfolio {
            cryptos: vec![Crypto {
                id: AssetId::new(),
                symbol: Symbol::new("SOL"),
                name: "Solana".to_string(),
                amount: d("10"),
                current_price: d("150"),
                previous_price: d("140"),
                staking_yield: Some(d("8")),
                purchase_price: None,
                purchase_date: None,
            }],
            ..Default::default()
        };
        let rates = rates();
        let totals = PortfolioAggregator::new(&rates).class_totals(&portfolio, as_of());
        let crypto = totals.get(AssetClass::Crypto).unwrap();
        assert_eq!(crypto.value, d("135000"));
        // 1500 * 8% / 12 = 10 USD
        assert_eq!(crypto.monthly_income, d("900"));
    }

    #[test]
    fn test_class_labels_and_colors() {
        assert_eq!(AssetClass::Deposits.value_label(), "Deposits");
        assert_eq!(AssetClass::Crypto.income_label(), "Staking");
        assert_eq!(AssetClass::RealEstate.color(), "#4caf50");
    }
}
