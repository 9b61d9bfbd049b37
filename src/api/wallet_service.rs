use crate::api::models::WalletBalances;
use crate::entity::BalanceError;
use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;
use serde_json::Value;

const WALLET_BALANCE_PATH: &str = "/api/wallet/balance";

/// Source of raw wallet balance records
#[async_trait]
pub trait WalletBalanceService: Send + Sync {
    async fn fetch_balances(&self, bearer_token: &str) -> Result<WalletBalances, BalanceError>;
}

/// Wallet balances from the backend REST API
pub struct HttpWalletBalanceService {
    http_client: Client,
    base_url: String,
}

impl HttpWalletBalanceService {
    pub fn new(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl WalletBalanceService for HttpWalletBalanceService {
    async fn fetch_balances(&self, bearer_token: &str) -> Result<WalletBalances, BalanceError> {
        let url = format!("{}{}", self.base_url, WALLET_BALANCE_PATH);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(bearer_token)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to fetch wallet balances: {}", e);
                BalanceError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Wallet balance API error [{}]: {}", status, message);
            return Err(BalanceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: Value = response.json().await.map_err(|e| {
            error!("Failed to parse wallet balance response: {}", e);
            BalanceError::MalformedResponse(e.to_string())
        })?;

        let balances = WalletBalances::from_payload(&payload)?;
        info!("Fetched {} wallet balance records", balances.balances.len());

        Ok(balances)
    }
}
