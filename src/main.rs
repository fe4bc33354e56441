use anyhow::Context;
use pulse_core::AppConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str =
    "pulse=info,pulse_core=info,reddit_client=info,sentiment_engine=info,analysis_service=info,api_server=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Pulse - Reddit Sentiment Analysis");

    let config = AppConfig::load().context("failed to load configuration")?;
    api_server::start_server(&config)
        .await
        .context("server terminated")?;

    Ok(())
}
