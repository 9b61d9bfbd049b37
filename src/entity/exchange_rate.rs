use crate::entity::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a resolved rate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    /// USD to USD, no lookup
    Identity,
    /// Returned by the pricing endpoint
    Live,
    /// Static approximation after a failed lookup
    Fallback,
    /// No rate known; amounts are shown in USD
    Unconverted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub currency_code: CurrencyCode,
    /// Units of `currency_code` per 1 USD
    pub rate_to_usd: Decimal,
    pub source: RateSource,
}

impl ExchangeRate {
    pub fn new(currency_code: CurrencyCode, rate_to_usd: Decimal, source: RateSource) -> Self {
        Self {
            currency_code,
            rate_to_usd,
            source,
        }
    }

    pub fn identity() -> Self {
        Self::new(CurrencyCode::Usd, Decimal::ONE, RateSource::Identity)
    }
}
