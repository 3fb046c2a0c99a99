use crate::datasource::cbr::DEFAULT_CBR_RATES_URL;
use crate::domain::{Decimal, ExchangeRateSnapshot};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub portfolio_path: PathBuf,
    pub cbr_rates_url: String,
    pub fallback_usd_rub: Decimal,
    pub fallback_eur_rub: Decimal,
    pub offline: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let portfolio_path = env_map
            .get("PORTFOLIO_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| ConfigError::MissingEnv("PORTFOLIO_PATH".to_string()))?;

        let cbr_rates_url = env_map
            .get("CBR_RATES_URL")
            .cloned()
            .unwrap_or_else(|| DEFAULT_CBR_RATES_URL.to_string());
        if !(cbr_rates_url.starts_with("http://") || cbr_rates_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue(
                "CBR_RATES_URL".to_string(),
                "must be an http(s) URL".to_string(),
            ));
        }

        let fallback_usd_rub = parse_rate(
            &env_map,
            "FALLBACK_USD_RUB",
            ExchangeRateSnapshot::FALLBACK_USD_RUB,
        )?;
        let fallback_eur_rub = parse_rate(
            &env_map,
            "FALLBACK_EUR_RUB",
            ExchangeRateSnapshot::FALLBACK_EUR_RUB,
        )?;

        let offline = match env_map
            .get("OFFLINE")
            .map(|s| s.trim().to_ascii_lowercase())
            .as_deref()
            .unwrap_or("false")
        {
            "1" | "true" | "yes" => true,
            "0" | "false" | "no" => false,
            other => {
                return Err(ConfigError::InvalidValue(
                    "OFFLINE".to_string(),
                    format!("must be true or false, got {}", other),
                ))
            }
        };

        Ok(Config {
            portfolio_path,
            cbr_rates_url,
            fallback_usd_rub,
            fallback_eur_rub,
            offline,
        })
    }

    /// Rates to use when no provider answers.
    pub fn fallback_rates(&self, at: DateTime<Utc>) -> ExchangeRateSnapshot {
        ExchangeRateSnapshot::new(self.fallback_usd_rub, self.fallback_eur_rub, at)
    }
}

fn parse_rate(
    env_map: &HashMap<String, String>,
    key: &str,
    default: Decimal,
) -> Result<Decimal, ConfigError> {
    let Some(raw) = env_map.get(key) else {
        return Ok(default);
    };
    let rate = Decimal::from_str_canonical(raw.trim()).map_err(|_| {
        ConfigError::InvalidValue(key.to_string(), "must be a decimal number".to_string())
    })?;
    if !rate.is_positive() {
        return Err(ConfigError::InvalidValue(
            key.to_string(),
            "must be positive".to_string(),
        ));
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_required_env() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert(
            "PORTFOLIO_PATH".to_string(),
            "/tmp/portfolio.json".to_string(),
        );
        map
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_env_map(setup_required_env()).unwrap();
        assert_eq!(config.portfolio_path, PathBuf::from("/tmp/portfolio.json"));
        assert_eq!(config.cbr_rates_url, DEFAULT_CBR_RATES_URL);
        assert_eq!(config.fallback_usd_rub, ExchangeRateSnapshot::FALLBACK_USD_RUB);
        assert_eq!(config.fallback_eur_rub, ExchangeRateSnapshot::FALLBACK_EUR_RUB);
        assert!(!config.offline);
    }

    #[test]
    fn test_missing_portfolio_path() {
        let mut env_map = setup_required_env();
        env_map.remove("PORTFOLIO_PATH");
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::MissingEnv(s)) => assert_eq!(s, "PORTFOLIO_PATH"),
            _ => panic!("Expected MissingEnv error"),
        }
    }

    #[test]
    fn test_invalid_fallback_rate() {
        let mut env_map = setup_required_env();
        env_map.insert("FALLBACK_USD_RUB".to_string(), "ninety".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "FALLBACK_USD_RUB"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_non_positive_fallback_rate() {
        let mut env_map = setup_required_env();
        env_map.insert("FALLBACK_EUR_RUB".to_string(), "0".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "FALLBACK_EUR_RUB"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_offline_flag() {
        let mut env_map = setup_required_env();
        env_map.insert("OFFLINE".to_string(), "maybe".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "OFFLINE"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_rates_url() {
        let mut env_map = setup_required_env();
        env_map.insert("CBR_RATES_URL".to_string(), "ftp://cbr.ru".to_string());
        assert!(matches!(
            Config::from_env_map(env_map),
            Err(ConfigError::InvalidValue(k, _)) if k == "CBR_RATES_URL"
        ));
    }

    #[test]
    fn test_overrides_feed_fallback_rates() {
        let mut env_map = setup_required_env();
        env_map.insert("FALLBACK_USD_RUB".to_string(), "85.10".to_string());
        env_map.insert("OFFLINE".to_string(), "TRUE".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert!(config.offline);

        let rates = config.fallback_rates(Utc::now());
        assert_eq!(rates.usd_rub, Decimal::from_str_canonical("85.1").unwrap());
        assert_eq!(rates.eur_rub, ExchangeRateSnapshot::FALLBACK_EUR_RUB);
    }
}
