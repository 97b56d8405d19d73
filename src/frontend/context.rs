use std::sync::Arc;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::common::{ApiError, AppConfig, ConfigError};
use crate::models::{Admin, Lang, ProfileUpdate};
use crate::services::{
    save_profile, AuthState, BrowserStore, FormError, Notifier, QueryCache, Session, Toast,
};

/// Browser configuration. `VITE_API_URL` is inlined at build time.
pub fn browser_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(|key| match key {
        "VITE_API_URL" => option_env!("VITE_API_URL").map(str::to_string),
        "AFFPRESS_DEFAULT_LANG" => option_env!("AFFPRESS_DEFAULT_LANG").map(str::to_string),
        _ => None,
    })
}

/// Shared handles of one app instance, provided as Leptos context.
#[derive(Clone)]
pub struct AppContext {
    pub client: ApiClient,
    pub notifier: Notifier,
    pub cache: QueryCache,
    pub auth: RwSignal<AuthState>,
    pub toasts: RwSignal<Vec<Toast>>,
    pub lang: RwSignal<Lang>,
    session: StoredValue<Session>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let client = ApiClient::new(config)?;
        let session = Session::new(Arc::new(BrowserStore)).with_client(client.clone());
        Ok(Self {
            client,
            notifier: Notifier::new(),
            cache: QueryCache::new(config.cache_ttl),
            auth: RwSignal::new(session.state().clone()),
            toasts: RwSignal::new(Vec::new()),
            lang: RwSignal::new(config.default_lang),
            session: StoredValue::new(session),
        })
    }

    /// Read the persisted session once at boot.
    pub fn rehydrate(&self) {
        let mut session = self.session.get_value();
        let state = session.rehydrate().clone();
        self.session.set_value(session);
        self.auth.set(state);
    }

    pub async fn login(&self, email: String, password: String) -> Result<Admin, ApiError> {
        let mut session = self.session.get_value();
        let result = session.login(&self.client, &email, &password).await;
        self.auth.set(session.state().clone());
        self.session.set_value(session);
        result
    }

    pub fn logout(&self) {
        let mut session = self.session.get_value();
        session.logout();
        self.auth.set(session.state().clone());
        self.session.set_value(session);
        self.notifier.info("Logged out");
        self.sync_toasts();
    }

    pub async fn save_profile(&self, update: ProfileUpdate) -> Result<Admin, FormError> {
        let mut session = self.session.get_value();
        let result = save_profile(&mut session, &self.client, &self.notifier, &update).await;
        self.auth.set(session.state().clone());
        self.session.set_value(session);
        self.sync_toasts();
        result
    }

    /// Publish the notifier queue to the toast signal.
    pub fn sync_toasts(&self) {
        self.toasts.set(self.notifier.snapshot());
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
