pub mod balance_presenter;

pub use balance_presenter::{BalanceDisplay, BalancePresenter, BalancePresenterImpl};
