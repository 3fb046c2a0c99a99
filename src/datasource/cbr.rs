//! Central Bank of Russia daily rates feed.

use super::{DataSourceError, RateProvider};
use crate::domain::{Decimal, ExchangeRateSnapshot};
use async_trait::async_trait;
use backoff::future::retry;
use backoff::ExponentialBackoff;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_CBR_RATES_URL: &str = "https://www.cbr-xml-daily.ru/daily_json.js";

/// Rate provider backed by the CBR daily JSON mirror.
#[derive(Debug, Clone)]
pub struct CbrRateProvider {
    client: Client,
    url: String,
}

impl CbrRateProvider {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Create with the public cbr-xml-daily URL.
    pub fn default_url() -> Self {
        Self::new(DEFAULT_CBR_RATES_URL.to_string())
    }

    async fn get_json(&self) -> Result<serde_json::Value, DataSourceError> {
        let backoff = ExponentialBackoff {
            max_elapsed_time: Some(Duration::from_secs(30)),
            ..Default::default()
        };

        retry(backoff, || async {
            let response = self.client.get(&self.url).send().await.map_err(|e| {
                backoff::Error::transient(DataSourceError::NetworkError(e.to_string()))
            })?;

            let status = response.status();
            if status == 429 {
                return Err(backoff::Error::transient(DataSourceError::RateLimited));
            }
            if status.is_server_error() {
                return Err(backoff::Error::transient(DataSourceError::HttpError {
                    status: status.as_u16(),
                    message: "Server error".to_string(),
                }));
            }
            if !status.is_success() {
                return Err(backoff::Error::permanent(DataSourceError::HttpError {
                    status: status.as_u16(),
                    message: "Client error".to_string(),
                }));
            }

            // The feed is served as application/javascript, so parse from text.
            let body = response
                .text()
                .await
                .map_err(|e| backoff::Error::transient(DataSourceError::NetworkError(e.to_string())))?;
            serde_json::from_str(&body)
                .map_err(|e| backoff::Error::permanent(DataSourceError::ParseError(e.to_string())))
        })
        .await
    }
}

#[async_trait]
impl RateProvider for CbrRateProvider {
    fn name(&self) -> &str {
        "cbr"
    }

    async fn fetch_rates(&self) -> Result<ExchangeRateSnapshot, DataSourceError> {
        debug!("Fetching exchange rates from {}", self.url);
        let response = self.get_json().await?;
        parse_cbr_rates(&response, Utc::now())
    }
}

/// Extract USD and EUR rates, rounded to kopecks, from a CBR daily document.
pub fn parse_cbr_rates(
    response: &serde_json::Value,
    fetched_at: DateTime<Utc>,
) -> Result<ExchangeRateSnapshot, DataSourceError> {
    let usd_rub = parse_valute(response, "USD")?;
    let eur_rub = parse_valute(response, "EUR")?;
    Ok(ExchangeRateSnapshot::new(usd_rub, eur_rub, fetched_at))
}

fn parse_valute(response: &serde_json::Value, code: &str) -> Result<Decimal, DataSourceError> {
    let value = response
        .get("Valute")
        .and_then(|v| v.get(code))
        .and_then(|v| v.get("Value"))
        .and_then(|v| v.as_f64())
        .ok_or_else(|| DataSourceError::ParseError(format!("Missing Valute.{}.Value", code)))?;

    let rate = Decimal::from_f64_lossy(value).round_dp(2);
    if !rate.is_positive() {
        return Err(DataSourceError::ParseError(format!(
            "Invalid {} rate: {}",
            code, value
        )));
    }
    Ok(rate)
}
