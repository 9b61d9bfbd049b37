pub mod balance_interactor;
pub mod currency_interactor;

pub use balance_interactor::{BalanceInteractor, BalanceInteractorImpl};
pub use currency_interactor::{CurrencyInteractor, CurrencyInteractorImpl};
