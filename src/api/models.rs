use crate::aggregator::parse_records;
use crate::entity::{BalanceError, BalanceRecord};
use crate::utils::parse_decimal;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

/// `data` payload of `GET /api/wallet/balance`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletBalances {
    pub balances: Vec<BalanceRecord>,
    pub solana_address: Option<String>,
}

impl WalletBalances {
    /// Decode `{ data: { balances: [...], solanaAddress? } }`.
    ///
    /// A missing `data` object or a non-list `balances` is an error; individual
    /// entries that fail to decode are dropped.
    pub fn from_payload(payload: &Value) -> Result<Self, BalanceError> {
        let data = payload
            .get("data")
            .filter(|data| data.is_object())
            .ok_or_else(|| BalanceError::MalformedResponse("missing data object".to_string()))?;

        let balances = data
            .get("balances")
            .ok_or_else(|| BalanceError::MalformedResponse("missing balances".to_string()))?;

        Ok(Self {
            balances: parse_records(balances)?,
            solana_address: data
                .get("solanaAddress")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}

/// Response of `GET /api/offramp/rates`
#[derive(Debug, Deserialize)]
pub struct RateResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<RateData>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RateData {
    pub rate: Option<Value>,
}

impl RateResponse {
    /// Positive numeric rate, if the response carries one
    pub fn usable_rate(&self) -> Result<Decimal, BalanceError> {
        if !self.success {
            return Err(BalanceError::MalformedResponse(
                self.error
                    .clone()
                    .unwrap_or_else(|| "rate lookup unsuccessful".to_string()),
            ));
        }

        let rate = match self.data.as_ref().and_then(|d| d.rate.as_ref()) {
            Some(Value::String(s)) => parse_decimal(s),
            Some(Value::Number(n)) => parse_decimal(&n.to_string()),
            _ => None,
        };

        match rate {
            Some(rate) if rate > Decimal::ZERO => Ok(rate),
            _ => Err(BalanceError::MalformedResponse(
                "response has no usable rate".to_string(),
            )),
        }
    }
}
