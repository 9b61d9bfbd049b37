use crate::entity::BalanceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fiat currencies a user can pick as display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Ngn,
    Ghs,
    Kes,
    Zar,
    Eur,
    Gbp,
}

impl CurrencyCode {
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Ngn => "NGN",
            CurrencyCode::Ghs => "GHS",
            CurrencyCode::Kes => "KES",
            CurrencyCode::Zar => "ZAR",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Ngn => "₦",
            CurrencyCode::Ghs => "GH₵",
            CurrencyCode::Kes => "KSh",
            CurrencyCode::Zar => "R",
            CurrencyCode::Eur => "€",
            CurrencyCode::Gbp => "£",
        }
    }

    pub fn fraction_digits(&self) -> u32 {
        2
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(CurrencyCode::Usd),
            "NGN" => Ok(CurrencyCode::Ngn),
            "GHS" => Ok(CurrencyCode::Ghs),
            "KES" => Ok(CurrencyCode::Kes),
            "ZAR" => Ok(CurrencyCode::Zar),
            "EUR" => Ok(CurrencyCode::Eur),
            "GBP" => Ok(CurrencyCode::Gbp),
            _ => Err(BalanceError::UnsupportedCurrency(s.to_string())),
        }
    }
}
