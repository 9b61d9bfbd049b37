use crate::entity::BalanceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fungible assets that can appear in a balance record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Asset {
    Eth,
    Sol,
    Celo,
    Matic,
    Btc,
    Usdc,
    Usdt,
    Cusd,
}

impl Asset {
    pub fn symbol(&self) -> &'static str {
        match self {
            Asset::Eth => "ETH",
            Asset::Sol => "SOL",
            Asset::Celo => "CELO",
            Asset::Matic => "MATIC",
            Asset::Btc => "BTC",
            Asset::Usdc => "USDC",
            Asset::Usdt => "USDT",
            Asset::Cusd => "cUSD",
        }
    }

    /// Key under which the backend puts the asset-denominated amount in `displayValues`
    pub fn display_key(&self) -> String {
        self.symbol().to_lowercase()
    }

    /// Dollar-pegged assets
    pub fn is_stable(&self) -> bool {
        matches!(self, Asset::Usdc | Asset::Usdt | Asset::Cusd)
    }

    /// Fraction digits used when rendering the per-asset amount
    pub fn display_precision(&self) -> u32 {
        if self.is_stable() {
            2
        } else {
            6
        }
    }

    /// Smallest-unit scaling assumed when a record omits `rawValueDecimals`
    pub fn default_decimals(&self) -> u32 {
        match self {
            Asset::Eth | Asset::Celo | Asset::Matic | Asset::Cusd => 18,
            Asset::Sol => 9,
            Asset::Usdc | Asset::Usdt => 6,
            Asset::Btc => 8,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Asset {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eth" => Ok(Asset::Eth),
            "sol" => Ok(Asset::Sol),
            "celo" => Ok(Asset::Celo),
            "matic" => Ok(Asset::Matic),
            "btc" => Ok(Asset::Btc),
            "usdc" => Ok(Asset::Usdc),
            "usdt" => Ok(Asset::Usdt),
            "cusd" => Ok(Asset::Cusd),
            _ => Err(BalanceError::UnknownAsset(s.to_string())),
        }
    }
}
