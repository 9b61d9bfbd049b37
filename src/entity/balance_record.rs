use crate::entity::{Asset, BalanceError, Chain};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One observed balance for a (chain, asset) pair, as returned by the wallet endpoint.
///
/// Amount fields accept either JSON strings or numbers. Anything else is
/// treated as absent so that a single odd field never rejects the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRecord {
    #[serde(default)]
    pub chain: String,

    #[serde(default)]
    pub asset: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub raw_value: Option<String>,

    #[serde(default, deserialize_with = "lenient_u32")]
    pub raw_value_decimals: Option<u32>,

    #[serde(default, deserialize_with = "lenient_map")]
    pub display_values: HashMap<String, String>,
}

impl BalanceRecord {
    pub fn new(chain: &str, asset: &str) -> Self {
        Self {
            chain: chain.to_string(),
            asset: asset.to_string(),
            ..Self::default()
        }
    }

    pub fn with_raw(mut self, raw_value: &str, decimals: Option<u32>) -> Self {
        self.raw_value = Some(raw_value.to_string());
        self.raw_value_decimals = decimals;
        self
    }

    pub fn with_display(mut self, unit: &str, value: &str) -> Self {
        self.display_values
            .insert(unit.to_string(), value.to_string());
        self
    }

    /// Resolve the wire identifiers into the closed chain/asset sets
    pub fn identify(&self) -> Result<(Chain, Asset), BalanceError> {
        let chain = self.chain.parse::<Chain>()?;
        let asset = self.asset.parse::<Asset>()?;
        Ok((chain, asset))
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_to_string))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    })
}

fn lenient_map<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<HashMap<String, Value>>::deserialize(deserializer)?;
    Ok(value
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(unit, v)| scalar_to_string(v).map(|v| (unit, v)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_wire_record() {
        let record: BalanceRecord = serde_json::from_value(json!({
            "chain": "base",
            "asset": "eth",
            "rawValue": "2500000000000000",
            "rawValueDecimals": 18,
            "displayValues": { "eth": "0.0025", "usd": "8.50" }
        }))
        .unwrap();

        assert_eq!(record.raw_value.as_deref(), Some("2500000000000000"));
        assert_eq!(record.raw_value_decimals, Some(18));
        assert_eq!(record.display_values.get("usd").map(String::as_str), Some("8.50"));
        assert_eq!(record.identify().unwrap(), (Chain::Base, Asset::Eth));
    }

    #[test]
    fn tolerates_numeric_and_missing_fields() {
        let record: BalanceRecord = serde_json::from_value(json!({
            "chain": "solana",
            "asset": "sol",
            "rawValue": 1500000000u64,
            "rawValueDecimals": "9",
            "displayValues": { "usd": 210.5, "sol": null }
        }))
        .unwrap();

        assert_eq!(record.raw_value.as_deref(), Some("1500000000"));
        assert_eq!(record.raw_value_decimals, Some(9));
        assert_eq!(record.display_values.get("usd").map(String::as_str), Some("210.5"));
        assert!(!record.display_values.contains_key("sol"));

        let bare: BalanceRecord = serde_json::from_value(json!({ "chain": "base" })).unwrap();
        assert_eq!(bare.raw_value, None);
        assert!(bare.display_values.is_empty());
    }

    #[test]
    fn negative_decimals_are_treated_as_missing() {
        let record: BalanceRecord = serde_json::from_value(json!({
            "chain": "base",
            "asset": "usdc",
            "rawValue": "1000000",
            "rawValueDecimals": -6
        }))
        .unwrap();
        assert_eq!(record.raw_value_decimals, None);
    }
}
