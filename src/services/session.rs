use std::sync::Arc;

use crate::api::ApiClient;
use crate::common::ApiError;
use crate::models::Admin;
use crate::services::permissions;
use crate::services::storage::{PersistedSession, SessionStore};

/// The auth slice: who is logged in, with which token, and whether the
/// persisted session has been read yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub admin: Option<Admin>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            admin: None,
            token: None,
            loading: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AuthStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Authenticated iff a non-empty token and an admin with an email are both present.
pub fn select_is_authenticated(state: &AuthState) -> bool {
    let has_token = state.token.as_deref().is_some_and(|t| !t.is_empty());
    let has_email = state.admin.as_ref().is_some_and(Admin::has_email);
    has_token && has_email
}

impl AuthState {
    pub fn status(&self) -> AuthStatus {
        if self.loading {
            AuthStatus::Loading
        } else if select_is_authenticated(self) {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        }
    }

    pub fn can(&self, key: &str) -> bool {
        permissions::can(self.admin.as_ref(), key)
    }

    pub fn is_mother(&self) -> bool {
        self.admin.as_ref().is_some_and(Admin::is_mother)
    }
}

/// Process-wide session: explicitly rehydrated at boot, torn down on logout.
#[derive(Clone)]
pub struct Session {
    state: AuthState,
    store: Arc<dyn SessionStore>,
    client: Option<ApiClient>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("state", &self.state).finish()
    }
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            state: AuthState::default(),
            store,
            client: None,
        }
    }

    /// Keep `client`'s bearer token in step with the session.
    pub fn with_client(mut self, client: ApiClient) -> Self {
        client.set_token(self.state.token.clone());
        self.client = Some(client);
        self
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn status(&self) -> AuthStatus {
        self.state.status()
    }

    pub fn is_authenticated(&self) -> bool {
        select_is_authenticated(&self.state)
    }

    pub fn admin(&self) -> Option<&Admin> {
        self.state.admin.as_ref()
    }

    pub fn can(&self, key: &str) -> bool {
        self.state.can(key)
    }

    /// Read the persisted session and leave the loading state. Unreadable
    /// storage resolves to logged out.
    pub fn rehydrate(&mut self) -> &AuthState {
        let persisted = match self.store.load() {
            Ok(p) => p.unwrap_or_default(),
            Err(e) => {
                log::warn!("Discarding unreadable session: {}", e);
                PersistedSession::default()
            }
        };
        self.state = AuthState {
            admin: persisted.admin,
            token: persisted.token.filter(|t| !t.is_empty()),
            loading: false,
        };
        self.sync_client();
        &self.state
    }

    /// Store token and admin in memory and in the session store.
    pub fn set_credentials(&mut self, token: String, admin: Admin) {
        self.state = AuthState {
            admin: Some(admin),
            token: Some(token),
            loading: false,
        };
        self.persist();
        self.sync_client();
    }

    /// Replace the cached admin after a profile edit.
    pub fn set_admin(&mut self, admin: Admin) {
        self.state.admin = Some(admin);
        self.persist();
    }

    pub async fn login(&mut self, client: &ApiClient, email: &str, password: &str) -> Result<Admin, ApiError> {
        let response = client.login(email, password).await?;
        let token = response.token.unwrap_or_default();
        let admin = response.admin.unwrap_or_else(|| Admin {
            email: email.trim().to_string(),
            ..Default::default()
        });
        log::info!("Admin {} logged in as {}", admin.email, admin.role);
        client.set_token(Some(token.clone()));
        self.set_credentials(token, admin.clone());
        Ok(admin)
    }

    /// Clear token and admin from memory and storage. Never fails.
    pub fn logout(&mut self) {
        self.state = AuthState {
            admin: None,
            token: None,
            loading: false,
        };
        if let Err(e) = self.store.clear() {
            log::error!("Failed to clear persisted session: {}", e);
        }
        self.sync_client();
    }

    fn persist(&self) {
        let persisted = PersistedSession {
            token: self.state.token.clone(),
            admin: self.state.admin.clone(),
        };
        if let Err(e) = self.store.save(&persisted) {
            log::error!("Failed to persist session: {}", e);
        }
    }

    fn sync_client(&self) {
        if let Some(client) = &self.client {
            client.set_token(self.state.token.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStore;

    fn admin(email: &str) -> Admin {
        Admin {
            email: email.into(),
            ..Default::default()
        }
    }

    #[test]
    fn new_session_is_loading_until_rehydrated() {
        let mut session = Session::new(Arc::new(MemoryStore::new()));
        assert_eq!(session.status(), AuthStatus::Loading);
        session.rehydrate();
        assert_eq!(session.status(), AuthStatus::Unauthenticated);
    }

    #[test]
    fn rehydrate_restores_persisted_credentials_into_client() {
        let store = MemoryStore::with_session(PersistedSession {
            token: Some("jwt".into()),
            admin: Some(admin("a@b.c")),
        });
        let client = ApiClient::with_base("http://localhost:5000").unwrap();
        let mut session = Session::new(Arc::new(store)).with_client(client.clone());

        session.rehydrate();
        assert_eq!(session.status(), AuthStatus::Authenticated);
        assert_eq!(client.token().as_deref(), Some("jwt"));
    }

    #[test]
    fn logout_clears_memory_storage_and_client() {
        let store = Arc::new(MemoryStore::new());
        let client = ApiClient::with_base("http://localhost:5000").unwrap();
        let mut session = Session::new(store.clone()).with_client(client.clone());
        session.set_credentials("jwt".into(), admin("a@b.c"));
        assert!(store.load().unwrap().is_some());

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(client.token(), None);
    }
}
