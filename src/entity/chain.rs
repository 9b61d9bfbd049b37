use crate::entity::BalanceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Networks the wallet endpoint reports balances for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Base,
    Solana,
    Ethereum,
    Celo,
    Polygon,
}

impl Chain {
    /// Wire identifier, as sent by the backend
    pub fn id(&self) -> &'static str {
        match self {
            Chain::Base => "base",
            Chain::Solana => "solana",
            Chain::Ethereum => "ethereum",
            Chain::Celo => "celo",
            Chain::Polygon => "polygon",
        }
    }

    /// Name used as the first half of a per-asset key (`Base_ETH`)
    pub fn display_name(&self) -> &'static str {
        match self {
            Chain::Base => "Base",
            Chain::Solana => "Solana",
            Chain::Ethereum => "Ethereum",
            Chain::Celo => "Celo",
            Chain::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Chain {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "base" => Ok(Chain::Base),
            "solana" => Ok(Chain::Solana),
            "ethereum" => Ok(Chain::Ethereum),
            "celo" => Ok(Chain::Celo),
            "polygon" => Ok(Chain::Polygon),
            _ => Err(BalanceError::UnknownChain(s.to_string())),
        }
    }
}
