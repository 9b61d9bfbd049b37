use crate::api::{RateService, SessionProvider};
use crate::currency::fallback_rate;
use crate::entity::{CurrencyCode, ExchangeRate, RateSource};
use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

#[async_trait]
pub trait CurrencyInteractor: Send + Sync {
    /// Rate for `currency`. Always usable: lookup failures resolve to the
    /// static table, or to rate 1 for currencies it does not cover.
    async fn resolve_rate(&self, currency: CurrencyCode) -> ExchangeRate;
}

pub struct CurrencyInteractorImpl {
    rate_service: Arc<dyn RateService + Send + Sync>,
    session: Arc<dyn SessionProvider + Send + Sync>,
}

impl CurrencyInteractorImpl {
    pub fn new(
        rate_service: Arc<dyn RateService + Send + Sync>,
        session: Arc<dyn SessionProvider + Send + Sync>,
    ) -> Self {
        Self {
            rate_service,
            session,
        }
    }
}

#[async_trait]
impl CurrencyInteractor for CurrencyInteractorImpl {
    async fn resolve_rate(&self, currency: CurrencyCode) -> ExchangeRate {
        if currency == CurrencyCode::Usd {
            return ExchangeRate::identity();
        }

        let Some(token) = self.session.bearer_token() else {
            info!("No session token, using fallback {} rate", currency);
            return fallback_rate(currency);
        };

        match self.rate_service.fetch_rate(&token, currency).await {
            Ok(rate) => {
                info!("Resolved live {} rate: {}", currency, rate);
                ExchangeRate::new(currency, rate, RateSource::Live)
            }
            Err(e) => {
                let fallback = fallback_rate(currency);
                warn!(
                    "Rate lookup for {} failed ({}), using {} rate {}",
                    currency,
                    e,
                    match fallback.source {
                        RateSource::Fallback => "fallback",
                        _ => "unconverted",
                    },
                    fallback.rate_to_usd
                );
                fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StaticSession;
    use crate::entity::BalanceError;
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeRateService {
        rate: Option<Decimal>,
        calls: AtomicUsize,
    }

    impl FakeRateService {
        fn new(rate: Option<Decimal>) -> Arc<Self> {
            Arc::new(Self {
                rate,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl RateService for FakeRateService {
        async fn fetch_rate(
            &self,
            _bearer_token: &str,
            _currency: CurrencyCode,
        ) -> Result<Decimal, BalanceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.rate
                .ok_or_else(|| BalanceError::MalformedResponse("network down".to_string()))
        }
    }

    fn interactor(service: Arc<FakeRateService>, token: Option<&str>) -> CurrencyInteractorImpl {
        CurrencyInteractorImpl::new(
            service,
            Arc::new(StaticSession::new(token.map(str::to_string))),
        )
    }

    #[tokio::test]
    async fn usd_needs_no_lookup() {
        let service = FakeRateService::new(Some(Decimal::from(2)));
        let rate = interactor(service.clone(), Some("token"))
            .resolve_rate(CurrencyCode::Usd)
            .await;

        assert_eq!(rate.rate_to_usd, Decimal::ONE);
        assert_eq!(rate.source, RateSource::Identity);
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn uses_live_rate() {
        let service = FakeRateService::new(Some(Decimal::from(1550)));
        let rate = interactor(service, Some("token"))
            .resolve_rate(CurrencyCode::Ngn)
            .await;

        assert_eq!(rate.rate_to_usd, Decimal::from(1550));
        assert_eq!(rate.source, RateSource::Live);
    }

    #[tokio::test]
    async fn ngn_falls_back_on_failure() {
        let service = FakeRateService::new(None);
        let rate = interactor(service.clone(), Some("token"))
            .resolve_rate(CurrencyCode::Ngn)
            .await;

        assert_eq!(rate.rate_to_usd, Decimal::from(1600));
        assert_eq!(rate.source, RateSource::Fallback);
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn uncovered_currency_degrades_to_usd() {
        let rate = interactor(FakeRateService::new(None), Some("token"))
            .resolve_rate(CurrencyCode::Gbp)
            .await;

        assert_eq!(rate.rate_to_usd, Decimal::ONE);
        assert_eq!(rate.source, RateSource::Unconverted);
    }

    #[tokio::test]
    async fn missing_token_uses_fallback_without_lookup() {
        let service = FakeRateService::new(Some(Decimal::from(1550)));
        let rate = interactor(service.clone(), None)
            .resolve_rate(CurrencyCode::Kes)
            .await;

        assert_eq!(rate.rate_to_usd, Decimal::from(155));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }
}
