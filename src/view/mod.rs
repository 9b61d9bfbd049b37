pub mod balance_view;

pub use balance_view::{BalanceView, ConsoleBalanceView};
