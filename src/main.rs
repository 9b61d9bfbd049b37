//! Wallet balance monitor - Main executable
//!
//! Polls the wallet balance endpoint while running and prints the
//! aggregated balance in the configured display currency.
use dotenv::dotenv;
use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use wallet_balance_core::{
    BalancePresenter, BalancePresenterImpl, Config, ConsoleBalanceView, ServiceContainer,
};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!(
        "Starting wallet balance monitor v{}",
        wallet_balance_core::VERSION
    );

    let config = Config::from_env();
    if config.api_token.is_none() {
        warn!("API_TOKEN is not set; balance and rate fetches will be skipped");
    }

    let settings = config.display_settings();
    let poll_interval = Duration::from_secs(config.poll_interval_secs);

    info!("Initializing services for {}...", config.api_base_url);
    let container = ServiceContainer::new(&config);

    let presenter = BalancePresenterImpl::new(
        container.balance_interactor(),
        container.currency_interactor(),
        Arc::new(ConsoleBalanceView::new()),
    );

    // The interval's first tick completes immediately
    let mut ticker = tokio::time::interval(poll_interval);

    info!(
        "Refreshing every {}s in {}. Press Ctrl+C to stop.",
        poll_interval.as_secs(),
        settings.currency
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = presenter.show_balances(&settings).await {
                    error!("Balance refresh tick failed: {:#}", e);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Stopping wallet balance monitor...");
                break;
            }
        }
    }

    Ok(())
}
