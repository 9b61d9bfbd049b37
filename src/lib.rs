pub mod aggregator;
pub mod api;
pub mod config;
pub mod currency;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use aggregator::{aggregate, aggregate_value};
pub use config::Config;
pub use currency::{convert, convert_str, fallback_rate, format_with_symbol};
pub use di::*;
pub use entity::*;
pub use interactor::*;
pub use presenter::*;
pub use view::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
