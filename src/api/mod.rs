pub mod models;
pub mod rate_service;
pub mod session;
pub mod wallet_service;

pub use models::{RateResponse, WalletBalances};
pub use rate_service::{OfframpRateService, RateService};
pub use session::{SessionProvider, StaticSession};
pub use wallet_service::{HttpWalletBalanceService, WalletBalanceService};
