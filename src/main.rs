use anyhow::Context;
use chrono::{Local, Utc};
use portfolio_engine::{
    config::Config, load_portfolio, CbrRateProvider, PortfolioReport, RateProvider,
    RateProviderChain,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("Configuration error")?;

    let portfolio = load_portfolio(&config.portfolio_path)?;

    let fallback = config.fallback_rates(Utc::now());
    let rates = if config.offline {
        tracing::info!("Offline mode, using fallback exchange rates");
        fallback
    } else {
        let providers: Vec<Arc<dyn RateProvider>> =
            vec![Arc::new(CbrRateProvider::new(config.cbr_rates_url.clone()))];
        RateProviderChain::new(providers, fallback)
            .fetch_rates_or_fallback()
            .await
    };

    let as_of = Local::now().date_naive();
    let report = PortfolioReport::build(&portfolio, &rates, as_of);
    tracing::info!(
        "Portfolio value {} {} as of {}",
        report.total_value.round_dp(2),
        report.reporting_currency,
        as_of
    );

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}
