use crate::api::models::RateResponse;
use crate::entity::{BalanceError, CurrencyCode};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use rust_decimal::Decimal;

const OFFRAMP_RATES_PATH: &str = "/api/offramp/rates";

// Rates are quoted for one unit of this stable asset on this network
const REFERENCE_TOKEN: &str = "USDC";
const REFERENCE_AMOUNT: &str = "1";
const REFERENCE_NETWORK: &str = "base";

/// Live fiat rate lookup
#[async_trait]
pub trait RateService: Send + Sync {
    /// Units of `currency` per 1 USD
    async fn fetch_rate(
        &self,
        bearer_token: &str,
        currency: CurrencyCode,
    ) -> Result<Decimal, BalanceError>;
}

/// Rates from the backend off-ramp pricing endpoint
pub struct OfframpRateService {
    http_client: Client,
    base_url: String,
}

impl OfframpRateService {
    pub fn new(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RateService for OfframpRateService {
    async fn fetch_rate(
        &self,
        bearer_token: &str,
        currency: CurrencyCode,
    ) -> Result<Decimal, BalanceError> {
        let url = format!("{}{}", self.base_url, OFFRAMP_RATES_PATH);

        debug!("Requesting {} rate from {}", currency, url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(bearer_token)
            .query(&[
                ("token", REFERENCE_TOKEN),
                ("amount", REFERENCE_AMOUNT),
                ("currency", currency.code()),
                ("network", REFERENCE_NETWORK),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Offramp rate API error [{}]: {}", status, message);
            return Err(BalanceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: RateResponse = response
            .json()
            .await
            .map_err(|e| BalanceError::MalformedResponse(e.to_string()))?;

        body.usable_rate()
    }
}
