use portfolio_engine::domain::{
    AssetId, Crypto, Currency, Decimal, DividendFrequency, PropertyKind, RealEstate, Security,
    SecurityKind, Symbol, Ticker,
};
use portfolio_engine::engine::{
    crypto_monthly_staking_income, price_change, price_change_percent, real_estate_annual_rental,
    real_estate_monthly_rental, real_estate_rental_yield, real_estate_rental_yield_percent,
    security_monthly_dividend, security_period_dividend, YieldSource,
};

fn d(s: &str) -> Decimal {
    Decimal::from_str_canonical(s).unwrap()
}

fn assert_close(actual: Decimal, expected: Decimal, epsilon: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= d(epsilon),
        "expected {} within {}, got {}",
        expected,
        epsilon,
        actual
    );
}

fn security(price: &str, quantity: u32, dividend: &str, frequency: DividendFrequency) -> Security {
    Security {
        id: AssetId::new(),
        name: "Sberbank".to_string(),
        ticker: Ticker::new("SBER"),
        kind: SecurityKind::Stock,
        current_price: d(price),
        previous_price: d(price),
        quantity,
        expected_dividend: d(dividend),
        dividend_frequency: frequency,
        currency: Currency::Rub,
    }
}

fn property(value: &str, rent: Option<&str>, stored_yield: Option<&str>) -> RealEstate {
    RealEstate {
        id: AssetId::new(),
        name: "Flat".to_string(),
        location: "Moscow".to_string(),
        kind: PropertyKind::Apartment,
        current_value: d(value),
        purchase_price: None,
        purchase_date: None,
        expected_rental_yield: stored_yield.map(d),
        monthly_rent: rent.map(d),
    }
}

#[test]
fn test_price_change_example() {
    assert_eq!(price_change(d("100"), d("90")), d("10"));
    assert_close(price_change_percent(d("100"), d("90")), d("11.11"), "0.01");
}

#[test]
fn test_price_change_percent_zero_previous() {
    for current in ["0", "1", "123.45", "1000000"] {
        assert!(price_change_percent(d(current), Decimal::zero()).is_zero());
    }
}

#[test]
fn test_period_dividend_annualizes_to_monthly() {
    for frequency in [
        DividendFrequency::Yearly,
        DividendFrequency::Quarterly,
        DividendFrequency::Monthly,
    ] {
        let s = security("273.4", 17, "7.3", frequency);
        let period = security_period_dividend(&s);
        let monthly = security_monthly_dividend(&s);
        let annual_from_period = period * Decimal::from(frequency.periods_per_year());
        assert_close(monthly * Decimal::from(12u32), annual_from_period, "0.0000001");
        assert_close(
            monthly * Decimal::from(frequency.months_per_period()),
            period,
            "0.0000001",
        );
    }
}

#[test]
fn test_quarterly_dividend_figures() {
    let s = security("100", 120, "10", DividendFrequency::Quarterly);
    // annual = 100 * 120 * 10% = 1200
    assert_eq!(security_period_dividend(&s), d("300"));
    assert_eq!(security_monthly_dividend(&s), d("100"));
}

#[test]
fn test_rental_example() {
    let p = property("5000000", Some("30000"), None);
    assert_eq!(real_estate_annual_rental(&p), d("360000"));
    assert_eq!(real_estate_monthly_rental(&p), d("30000"));
    assert_close(real_estate_rental_yield_percent(&p), d("7.2"), "0.0001");
    assert!(real_estate_rental_yield(&p).is_calculated());
}

#[test]
fn test_rent_overrides_stored_yield() {
    let p = property("5000000", Some("30000"), Some("12"));
    let rental_yield = real_estate_rental_yield(&p);
    assert_eq!(rental_yield.source, YieldSource::Calculated);
    assert_close(rental_yield.percent, d("7.2"), "0.0001");
    assert_eq!(real_estate_annual_rental(&p), d("360000"));
}

#[test]
fn test_stored_yield_without_rent() {
    let p = property("4000000", None, Some("6"));
    assert_eq!(real_estate_annual_rental(&p), d("240000"));
    let rental_yield = real_estate_rental_yield(&p);
    assert_eq!(rental_yield.source, YieldSource::Stored);
    assert_eq!(rental_yield.percent, d("6"));
}

#[test]
fn test_zero_rent_behaves_as_absent() {
    let p = property("4000000", Some("0"), Some("6"));
    assert_eq!(real_estate_annual_rental(&p), d("240000"));
    assert_eq!(real_estate_rental_yield(&p).source, YieldSource::Stored);
}

#[test]
fn test_property_without_income_data() {
    let p = property("3000000", None, None);
    assert!(real_estate_annual_rental(&p).is_zero());
    let rental_yield = real_estate_rental_yield(&p);
    assert_eq!(rental_yield.source, YieldSource::Absent);
    assert!(rental_yield.percent.is_zero());
}

#[test]
fn test_rent_on_zero_value_falls_back_to_stored_yield() {
    let p = property("0", Some("30000"), Some("5"));
    let rental_yield = real_estate_rental_yield(&p);
    assert_eq!(rental_yield.source, YieldSource::Stored);
    assert_eq!(rental_yield.percent, d("5"));
    // Rent still counts as income even though no yield can be derived.
    assert_eq!(real_estate_annual_rental(&p), d("360000"));
}

#[test]
fn test_staking_example() {
    let crypto = Crypto {
        id: AssetId::new(),
        symbol: Symbol::new("BTC"),
        name: "Bitcoin".to_string(),
        amount: d("0.5"),
        current_price: d("50000"),
        previous_price: d("50000"),
        staking_yield: Some(d("5")),
        purchase_price: None,
        purchase_date: None,
    };
    assert_close(crypto_monthly_staking_income(&crypto), d("104.17"), "0.01");

    let unstaked = Crypto {
        staking_yield: None,
        ..crypto
    };
    assert!(crypto_monthly_staking_income(&unstaked).is_zero());
}
