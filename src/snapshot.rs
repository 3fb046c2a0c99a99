//! Loading portfolio snapshots from JSON files.

use crate::domain::Portfolio;
use crate::error::AppError;
use std::path::Path;
use tracing::debug;

/// Parse and validate a portfolio snapshot.
pub fn parse_portfolio(json: &str) -> Result<Portfolio, AppError> {
    let portfolio: Portfolio = serde_json::from_str(json)?;
    portfolio.validate()?;
    Ok(portfolio)
}

/// Read, parse and validate the snapshot at `path`.
pub fn load_portfolio(path: &Path) -> Result<Portfolio, AppError> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let portfolio = parse_portfolio(&json)?;
    debug!(
        "Loaded {} securities, {} properties, {} deposits, {} cryptos from {}",
        portfolio.securities.len(),
        portfolio.real_estate.len(),
        portfolio.deposits.len(),
        portfolio.cryptos.len(),
        path.display()
    );
    Ok(portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_empty_portfolio() {
        let portfolio = parse_portfolio("{}").unwrap();
        assert!(portfolio.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_portfolio("{"), Err(AppError::Json(_))));
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let json = r#"{"deposits": [{
            "id": "6f1c2a7e-3b7d-4d1e-9a55-1c2b3d4e5f60",
            "name": "Savings", "bank": "Bank", "amount": 1000, "interestRate": 5,
            "currency": "GBP", "capitalization": "none", "type": "demand"
        }]}"#;
        assert!(matches!(parse_portfolio(json), Err(AppError::Json(_))));
    }
}
