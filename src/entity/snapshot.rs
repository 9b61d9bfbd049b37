use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalised view of a wallet: per-asset display amounts plus a USD total.
///
/// Rebuilt from scratch on every successful fetch; there is no merging with
/// the previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateBalanceSnapshot {
    /// `{ChainDisplayName}_{ASSET_SYMBOL}` -> fixed-precision amount
    pub per_asset: BTreeMap<String, String>,
    pub total_usd: String,
}

impl AggregateBalanceSnapshot {
    pub fn empty() -> Self {
        Self {
            per_asset: BTreeMap::new(),
            total_usd: "0.00".to_string(),
        }
    }
}

impl Default for AggregateBalanceSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
