//! Client context - dependency injection container

use std::sync::Arc;

use labelprint_core::{
    AppSettingsService, KeyValueStore, LoadingSink, SessionContext, SessionService,
};
use labelprint_domain::{Config, Result};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

use crate::api::{ApiClient, ApiClientConfig, AuthApi, LabelTemplateApi, PrintJobApi, PrinterApi};
use crate::storage::open_store;
use crate::ui::{UiEvent, UiEvents};

/// Every service of the client, wired from one [`Config`]
pub struct ClientContext {
    pub config: Config,
    pub store: Arc<dyn KeyValueStore>,
    pub session: SessionContext,
    pub settings: Arc<AppSettingsService>,
    pub user: Arc<SessionService>,
    pub api: Arc<ApiClient>,
    pub labels: LabelTemplateApi,
    pub print_jobs: PrintJobApi,
    pub printers: PrinterApi,
    pub events: UiEvents,
}

impl ClientContext {
    /// Wire the client and restore persisted session and theme.
    ///
    /// The returned receiver carries notifications and navigation requests
    /// for the front end.
    ///
    /// # Errors
    /// Returns a storage error if the configured store cannot be opened, or a
    /// config error for an invalid endpoint.
    pub fn new(config: Config) -> Result<(Self, UnboundedReceiver<UiEvent>)> {
        let store = open_store(&config.storage)?;
        let session = SessionContext::new(store.clone());
        let (events, rx) = UiEvents::channel();

        let client_config = ApiClientConfig::from_api_config(&config.api);
        let settings = Arc::new(AppSettingsService::new(
            store.clone(),
            config.app.clone(),
            client_config.endpoint()?.to_string(),
        ));

        let api = Arc::new(
            ApiClient::builder()
                .config(client_config)
                .session(session.clone())
                .notifier(Arc::new(events.clone()))
                .navigator(Arc::new(events.clone()))
                .loading(settings.clone() as Arc<dyn LoadingSink>)
                .build()?,
        );

        let auth = Arc::new(AuthApi::new(api.clone()));
        let user = Arc::new(SessionService::new(auth, session.clone()));

        let restored = user.initialize();
        let theme = settings.initialize();
        info!(endpoint = %api.endpoint(), restored, %theme, "client context ready");

        let context = Self {
            labels: LabelTemplateApi::new(api.clone()),
            print_jobs: PrintJobApi::new(api.clone()),
            printers: PrinterApi::new(api.clone()),
            config,
            store,
            session,
            settings,
            user,
            api,
            events,
        };
        Ok((context, rx))
    }
}
