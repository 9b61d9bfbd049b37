mod asset;
mod balance_error;
mod balance_record;
mod chain;
mod currency_code;
mod exchange_rate;
mod settings;
mod snapshot;

pub use asset::Asset;
pub use balance_error::BalanceError;
pub use balance_record::BalanceRecord;
pub use chain::Chain;
pub use currency_code::CurrencyCode;
pub use exchange_rate::{ExchangeRate, RateSource};
pub use settings::DisplaySettings;
pub use snapshot::AggregateBalanceSnapshot;
