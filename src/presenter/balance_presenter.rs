use crate::currency::format_with_symbol;
use crate::entity::{AggregateBalanceSnapshot, DisplaySettings, ExchangeRate, RateSource};
use crate::interactor::{BalanceInteractor, CurrencyInteractor};
use crate::utils::parse_decimal;
use crate::view::balance_view::BalanceView;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

/// Everything the balance card and asset list render
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceDisplay {
    pub address: Option<String>,
    /// Total in the display currency, with symbol
    pub total: String,
    pub total_usd: String,
    pub rate: ExchangeRate,
    /// `(key, amount)` pairs in key order
    pub assets: Vec<(String, String)>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl BalanceDisplay {
    pub fn new(
        snapshot: &AggregateBalanceSnapshot,
        rate: ExchangeRate,
        address: Option<String>,
        refreshed_at: Option<DateTime<Utc>>,
    ) -> Self {
        let total_usd = parse_decimal(&snapshot.total_usd).unwrap_or(Decimal::ZERO);

        Self {
            address,
            total: format_with_symbol(total_usd, &rate),
            total_usd: snapshot.total_usd.clone(),
            rate,
            assets: snapshot
                .per_asset
                .iter()
                .map(|(key, amount)| (key.clone(), amount.clone()))
                .collect(),
            refreshed_at,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self.rate.source, RateSource::Live | RateSource::Fallback)
    }
}

#[async_trait]
pub trait BalancePresenter: Send + Sync {
    async fn show_balances(&self, settings: &DisplaySettings) -> Result<()>;
}

pub struct BalancePresenterImpl<V> {
    balance_interactor: Arc<dyn BalanceInteractor + Send + Sync>,
    currency_interactor: Arc<dyn CurrencyInteractor + Send + Sync>,
    view: Arc<V>,
    last_total: Mutex<Option<String>>,
}

impl<V> BalancePresenterImpl<V>
where
    V: BalanceView,
{
    pub fn new(
        balance_interactor: Arc<dyn BalanceInteractor + Send + Sync>,
        currency_interactor: Arc<dyn CurrencyInteractor + Send + Sync>,
        view: Arc<V>,
    ) -> Self {
        Self {
            balance_interactor,
            currency_interactor,
            view,
            last_total: Mutex::new(None),
        }
    }

    // True when the total differs from the previously shown one
    fn total_changed(&self, total: &str) -> bool {
        let mut last = self.last_total.lock().unwrap_or_else(|e| e.into_inner());
        let changed = last.as_ref().is_some_and(|previous| previous != total);
        *last = Some(total.to_string());
        changed
    }
}

#[async_trait]
impl<V> BalancePresenter for BalancePresenterImpl<V>
where
    V: BalanceView + Send + Sync,
{
    async fn show_balances(&self, settings: &DisplaySettings) -> Result<()> {
        let snapshot = self.balance_interactor.refresh().await;
        let rate = self.currency_interactor.resolve_rate(settings.currency).await;

        let display = BalanceDisplay::new(
            &snapshot,
            rate,
            self.balance_interactor.wallet_address(),
            self.balance_interactor.last_refreshed_at(),
        );

        let changed = self.total_changed(&display.total);
        self.view
            .display_balances(&display)
            .await
            .context("Failed to display balances")?;

        if settings.haptics_enabled && changed {
            self.view
                .feedback()
                .await
                .context("Failed to send balance feedback")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::CurrencyCode;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeBalances {
        totals: Mutex<Vec<&'static str>>,
    }

    #[async_trait]
    impl BalanceInteractor for FakeBalances {
        fn get_snapshot(&self) -> AggregateBalanceSnapshot {
            AggregateBalanceSnapshot::empty()
        }

        async fn refresh(&self) -> AggregateBalanceSnapshot {
            let total = self.totals.lock().unwrap().remove(0);
            let mut per_asset = BTreeMap::new();
            per_asset.insert("Solana_USDC".to_string(), total.to_string());
            AggregateBalanceSnapshot {
                per_asset,
                total_usd: total.to_string(),
            }
        }

        fn wallet_address(&self) -> Option<String> {
            Some("addr".to_string())
        }

        fn last_refreshed_at(&self) -> Option<DateTime<Utc>> {
            None
        }
    }

    struct FixedRate(ExchangeRate);

    #[async_trait]
    impl CurrencyInteractor for FixedRate {
        async fn resolve_rate(&self, _currency: CurrencyCode) -> ExchangeRate {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingView {
        shown: Mutex<Vec<BalanceDisplay>>,
        feedback: AtomicUsize,
    }

    #[async_trait]
    impl BalanceView for RecordingView {
        async fn display_balances(&self, display: &BalanceDisplay) -> Result<()> {
            self.shown.lock().unwrap().push(display.clone());
            Ok(())
        }

        async fn feedback(&self) -> Result<()> {
            self.feedback.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct BrokenView;

    #[async_trait]
    impl BalanceView for BrokenView {
        async fn display_balances(&self, _display: &BalanceDisplay) -> Result<()> {
            Err(anyhow::anyhow!("stdout closed"))
        }

        async fn feedback(&self) -> Result<()> {
            Ok(())
        }
    }

    fn presenter(
        totals: Vec<&'static str>,
        rate: ExchangeRate,
        view: Arc<RecordingView>,
    ) -> BalancePresenterImpl<RecordingView> {
        BalancePresenterImpl::new(
            Arc::new(FakeBalances {
                totals: Mutex::new(totals),
            }),
            Arc::new(FixedRate(rate)),
            view,
        )
    }

    #[tokio::test]
    async fn shows_converted_total() {
        let view = Arc::new(RecordingView::default());
        let rate = ExchangeRate::new(CurrencyCode::Ngn, Decimal::from(1550), RateSource::Live);
        let presenter = presenter(vec!["100.00"], rate, view.clone());

        let settings = DisplaySettings {
            currency: CurrencyCode::Ngn,
            haptics_enabled: false,
        };
        presenter.show_balances(&settings).await.unwrap();

        let shown = view.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].total, "₦155,000.00");
        assert_eq!(shown[0].total_usd, "100.00");
        assert_eq!(shown[0].assets, vec![("Solana_USDC".to_string(), "100.00".to_string())]);
        assert!(shown[0].is_converted());
    }

    #[tokio::test]
    async fn haptic_feedback_only_on_change() {
        let view = Arc::new(RecordingView::default());
        let presenter = presenter(
            vec!["1.00", "1.00", "2.00"],
            ExchangeRate::identity(),
            view.clone(),
        );
        let settings = DisplaySettings {
            currency: CurrencyCode::Usd,
            haptics_enabled: true,
        };

        for _ in 0..3 {
            presenter.show_balances(&settings).await.unwrap();
        }

        assert_eq!(view.shown.lock().unwrap().len(), 3);
        assert_eq!(view.feedback.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn no_feedback_when_haptics_disabled() {
        let view = Arc::new(RecordingView::default());
        let presenter = presenter(vec!["1.00", "2.00"], ExchangeRate::identity(), view.clone());
        let settings = DisplaySettings::default();

        presenter.show_balances(&settings).await.unwrap();
        presenter.show_balances(&settings).await.unwrap();

        assert_eq!(view.feedback.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn view_errors_carry_context() {
        let presenter = BalancePresenterImpl::new(
            Arc::new(FakeBalances {
                totals: Mutex::new(vec!["1.00"]),
            }),
            Arc::new(FixedRate(ExchangeRate::identity())),
            Arc::new(BrokenView),
        );

        let err = presenter
            .show_balances(&DisplaySettings::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to display balances");
        assert_eq!(format!("{:#}", err), "Failed to display balances: stdout closed");
    }
}
