use crate::presenter::balance_presenter::BalanceDisplay;
use crate::utils::shorten_address;
use anyhow::Result;
use async_trait::async_trait;
use std::io::Write;

#[async_trait]
pub trait BalanceView: Send + Sync {
    async fn display_balances(&self, display: &BalanceDisplay) -> Result<()>;

    /// Haptic-style cue when the total changes
    async fn feedback(&self) -> Result<()>;
}

/// Plain-text balance card written to stdout
#[derive(Debug, Default)]
pub struct ConsoleBalanceView;

impl ConsoleBalanceView {
    pub fn new() -> Self {
        Self
    }

    fn format_total_text(display: &BalanceDisplay) -> String {
        let mut text = format!("Total Balance: {}", display.total);
        if display.is_converted() {
            text.push_str(&format!(
                " (${} @ {} {}/USD)",
                display.total_usd, display.rate.rate_to_usd, display.rate.currency_code
            ));
        }
        text
    }

    fn format_assets_text(display: &BalanceDisplay) -> String {
        if display.assets.is_empty() {
            return "No assets yet".to_string();
        }

        display
            .assets
            .iter()
            .map(|(key, amount)| {
                // Keys look like Base_ETH
                let (chain, symbol) = key.split_once('_').unwrap_or(("", key.as_str()));
                format!("• {} {} on {}", amount, symbol, chain)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render(display: &BalanceDisplay) -> String {
        let mut text = String::new();

        if let Some(address) = &display.address {
            text.push_str(&format!("Wallet: {}\n", shorten_address(address)));
        }
        text.push_str(&Self::format_total_text(display));
        text.push_str("\n\n");
        text.push_str(&Self::format_assets_text(display));

        if let Some(refreshed_at) = display.refreshed_at {
            text.push_str(&format!(
                "\n\nUpdated {}",
                refreshed_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        text
    }
}

#[async_trait]
impl BalanceView for ConsoleBalanceView {
    async fn display_balances(&self, display: &BalanceDisplay) -> Result<()> {
        println!("{}\n", Self::render(display));
        Ok(())
    }

    async fn feedback(&self) -> Result<()> {
        // Terminal bell
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }
}
