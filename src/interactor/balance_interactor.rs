use crate::aggregator::aggregate;
use crate::api::{SessionProvider, WalletBalanceService};
use crate::entity::AggregateBalanceSnapshot;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Consumer-facing wallet balance queries.
///
/// There is no internal timer: callers invoke [`refresh`](Self::refresh) on
/// their own schedule, typically while the balance view is visible.
#[async_trait]
pub trait BalanceInteractor: Send + Sync {
    /// Last successfully computed snapshot, or the empty snapshot
    fn get_snapshot(&self) -> AggregateBalanceSnapshot;

    /// Fetch and aggregate. On failure, or without a session, the retained
    /// snapshot is returned unchanged.
    async fn refresh(&self) -> AggregateBalanceSnapshot;

    /// Solana address reported with the last successful fetch
    fn wallet_address(&self) -> Option<String>;

    fn last_refreshed_at(&self) -> Option<DateTime<Utc>>;
}

#[derive(Debug, Default)]
struct BalanceState {
    snapshot: AggregateBalanceSnapshot,
    wallet_address: Option<String>,
    refreshed_at: Option<DateTime<Utc>>,
}

pub struct BalanceInteractorImpl {
    wallet_service: Arc<dyn WalletBalanceService + Send + Sync>,
    session: Arc<dyn SessionProvider + Send + Sync>,
    state: RwLock<BalanceState>,
}

impl BalanceInteractorImpl {
    pub fn new(
        wallet_service: Arc<dyn WalletBalanceService + Send + Sync>,
        session: Arc<dyn SessionProvider + Send + Sync>,
    ) -> Self {
        Self {
            wallet_service,
            session,
            state: RwLock::new(BalanceState::default()),
        }
    }

    // A poisoned lock still holds a complete snapshot
    fn read_state(&self) -> RwLockReadGuard<'_, BalanceState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, BalanceState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl BalanceInteractor for BalanceInteractorImpl {
    fn get_snapshot(&self) -> AggregateBalanceSnapshot {
        self.read_state().snapshot.clone()
    }

    async fn refresh(&self) -> AggregateBalanceSnapshot {
        let Some(token) = self.session.bearer_token() else {
            info!("No session token, skipping wallet balance refresh");
            return self.get_snapshot();
        };

        let balances = match self.wallet_service.fetch_balances(&token).await {
            Ok(balances) => balances,
            Err(e) => {
                warn!("Wallet balance refresh failed, keeping previous snapshot: {}", e);
                return self.get_snapshot();
            }
        };

        let snapshot = aggregate(&balances.balances);
        info!(
            "Wallet balance refreshed: {} assets, total ${}",
            snapshot.per_asset.len(),
            snapshot.total_usd
        );

        // Last completed refresh wins, even if it was started earlier
        let mut state = self.write_state();
        state.snapshot = snapshot.clone();
        state.wallet_address = balances.solana_address;
        state.refreshed_at = Some(Utc::now());

        snapshot
    }

    fn wallet_address(&self) -> Option<String> {
        self.read_state().wallet_address.clone()
    }

    fn last_refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.read_state().refreshed_at
    }
}
