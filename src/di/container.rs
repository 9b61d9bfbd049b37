use std::sync::Arc;

use reqwest::Client;

use crate::api::{
    HttpWalletBalanceService, OfframpRateService, RateService, SessionProvider, StaticSession,
    WalletBalanceService,
};
use crate::config::Config;
use crate::interactor::{
    BalanceInteractor, BalanceInteractorImpl, CurrencyInteractor, CurrencyInteractorImpl,
};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    balance_interactor: Arc<dyn BalanceInteractor + Send + Sync>,
    currency_interactor: Arc<dyn CurrencyInteractor + Send + Sync>,
}

impl ServiceContainer {
    /// Wire HTTP services and interactors from configuration
    pub fn new(config: &Config) -> Self {
        let http_client = Client::new();
        let session = Arc::new(StaticSession::new(config.api_token.clone()))
            as Arc<dyn SessionProvider + Send + Sync>;

        Self::with_services(
            session,
            Arc::new(HttpWalletBalanceService::new(
                http_client.clone(),
                &config.api_base_url,
            )),
            Arc::new(OfframpRateService::new(http_client, &config.api_base_url)),
        )
    }

    /// Wire interactors around caller-supplied services
    pub fn with_services(
        session: Arc<dyn SessionProvider + Send + Sync>,
        wallet_service: Arc<dyn WalletBalanceService + Send + Sync>,
        rate_service: Arc<dyn RateService + Send + Sync>,
    ) -> Self {
        let balance_interactor = Arc::new(BalanceInteractorImpl::new(
            wallet_service,
            session.clone(),
        )) as Arc<dyn BalanceInteractor + Send + Sync>;

        let currency_interactor = Arc::new(CurrencyInteractorImpl::new(rate_service, session))
            as Arc<dyn CurrencyInteractor + Send + Sync>;

        Self {
            balance_interactor,
            currency_interactor,
        }
    }

    pub fn balance_interactor(&self) -> Arc<dyn BalanceInteractor + Send + Sync> {
        self.balance_interactor.clone()
    }

    pub fn currency_interactor(&self) -> Arc<dyn CurrencyInteractor + Send + Sync> {
        self.currency_interactor.clone()
    }
}
