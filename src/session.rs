//! Session Service
//!
//! Signed-in user and organization, persisted to browser storage.
//! Sign-in is simulated: any non-empty credentials are accepted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::format::avatar_url;
use crate::models::{Organization, User};

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "user";
pub const ORGANIZATION_KEY: &str = "organization";

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Email and password are required")]
    EmptyCredentials,
    #[error("Storage unavailable: {0}")]
    Storage(String),
    #[error("Could not serialize session data: {0}")]
    Serialize(String),
}

// ========================
// Storage
// ========================

/// Key/value persistence for session data
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str);
}

/// Browser `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let storage = Self::storage().ok_or_else(|| SessionError::Storage("localStorage missing".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory storage, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

// ========================
// Service
// ========================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub organization: Option<Organization>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn organization_slug(&self) -> Option<&str> {
        self.organization.as_ref().map(|o| o.slug.as_str())
    }
}

pub struct SessionService<S: SessionStorage> {
    storage: S,
    state: SessionState,
}

impl<S: SessionStorage> SessionService<S> {
    /// Restore from storage. Corrupt entries are wiped and the session
    /// starts signed out.
    pub fn restore(storage: S) -> Self {
        let mut service = Self { storage, state: SessionState::default() };

        if service.storage.get(TOKEN_KEY).is_none() {
            return service;
        }
        let (Some(user), Some(org)) = (service.storage.get(USER_KEY), service.storage.get(ORGANIZATION_KEY)) else {
            return service;
        };

        match (serde_json::from_str::<User>(&user), serde_json::from_str::<Organization>(&org)) {
            (Ok(user), Ok(organization)) => {
                log::info!("[SESSION] Restored session for {}", user.email);
                service.state = SessionState { user: Some(user), organization: Some(organization) };
            }
            (user, org) => {
                log::warn!(
                    "[SESSION] Discarding corrupt session data (user ok: {}, organization ok: {})",
                    user.is_ok(),
                    org.is_ok()
                );
                service.clear_storage();
            }
        }
        service
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// Fabricate a user and the demo organization for any non-empty credentials
    pub fn login(&mut self, email: &str, password: &str, now_millis: i64) -> Result<(), SessionError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(SessionError::EmptyCredentials);
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = User {
            id: "1".to_string(),
            email: email.to_string(),
            avatar: Some(avatar_url(&name)),
            name,
        };
        let organization = demo_organization();

        self.storage.set(TOKEN_KEY, &format!("mock-token-{}", now_millis))?;
        self.storage.set(USER_KEY, &to_json(&user)?)?;
        self.storage.set(ORGANIZATION_KEY, &to_json(&organization)?)?;

        log::info!("[SESSION] Signed in as {}", user.email);
        self.state = SessionState { user: Some(user), organization: Some(organization) };
        Ok(())
    }

    /// Drop all persisted session data
    pub fn logout(&mut self) {
        self.clear_storage();
        self.state = SessionState::default();
        log::info!("[SESSION] Signed out");
    }

    pub fn set_organization(&mut self, organization: Organization) -> Result<(), SessionError> {
        self.storage.set(ORGANIZATION_KEY, &to_json(&organization)?)?;
        log::info!("[SESSION] Switched organization to {}", organization.slug);
        self.state.organization = Some(organization);
        Ok(())
    }

    fn clear_storage(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.storage.remove(ORGANIZATION_KEY);
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, SessionError> {
    serde_json::to_string(value).map_err(|e| SessionError::Serialize(e.to_string()))
}

/// Parse a persisted JSON entry, treating garbage as absent
pub fn read_json<T: DeserializeOwned, S: SessionStorage>(storage: &S, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[SESSION] Ignoring unreadable {}: {}", key, e);
            None
        }
    }
}

fn demo_organization() -> Organization {
    Organization {
        id: "1".to_string(),
        name: "Demo Organization".to_string(),
        slug: "demo-org".to_string(),
        contact_email: "admin@demo.com".to_string(),
        created_at: None,
        updated_at: None,
    }
}

// ========================
// Reactive wrapper
// ========================

/// Session handle provided via context
#[derive(Clone, Copy)]
pub struct Session {
    service: StoredValue<SessionService<LocalStorage>>,
    state: RwSignal<SessionState>,
}

impl Session {
    pub fn restore() -> Self {
        let service = SessionService::restore(LocalStorage);
        let state = RwSignal::new(service.state().clone());
        Self { service: StoredValue::new(service), state }
    }

    pub fn state(&self) -> Signal<SessionState> {
        self.state.into()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn organization(&self) -> Option<Organization> {
        self.state.with(|s| s.organization.clone())
    }

    pub fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let now = chrono::Utc::now().timestamp_millis();
        let result = self
            .service
            .try_update_value(|s| s.login(email, password, now))
            .unwrap_or(Ok(()));
        self.sync();
        result
    }

    pub fn logout(&self) {
        self.service.update_value(|s| s.logout());
        self.sync();
    }

    pub fn set_organization(&self, organization: Organization) -> Result<(), SessionError> {
        let result = self
            .service
            .try_update_value(|s| s.set_organization(organization))
            .unwrap_or(Ok(()));
        self.sync();
        result
    }

    fn sync(&self) {
        let state = self.service.with_value(|s| s.state().clone());
        self.state.set(state);
    }
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_session() -> MemoryStorage {
        let storage = MemoryStorage::default();
        storage.set(TOKEN_KEY, "mock-token-1").unwrap();
        storage
            .set(USER_KEY, r#"{"id":"1","email":"ana@acme.com","name":"ana"}"#)
            .unwrap();
        storage
            .set(
                ORGANIZATION_KEY,
                r#"{"id":"7","name":"Acme","slug":"acme","contactEmail":"ops@acme.com"}"#,
            )
            .unwrap();
        storage
    }

    #[test]
    fn test_restore_valid_session() {
        let service = SessionService::restore(stored_session());
        assert!(service.state().is_authenticated());
        assert_eq!(service.state().organization_slug(), Some("acme"));
    }

    #[test]
    fn test_restore_corrupt_session_resets() {
        let storage = stored_session();
        storage.set(USER_KEY, "{not json").unwrap();

        let service = SessionService::restore(storage.clone());
        assert!(!service.state().is_authenticated());
        assert!(service.state().user.is_none());
        assert!(service.state().organization.is_none());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(ORGANIZATION_KEY).is_none());
    }

    #[test]
    fn test_restore_without_token_is_signed_out() {
        let storage = stored_session();
        storage.remove(TOKEN_KEY);
        let service = SessionService::restore(storage.clone());
        assert!(!service.state().is_authenticated());
        // Leftover entries are not treated as corruption
        assert!(storage.get(USER_KEY).is_some());
    }

    #[test]
    fn test_login_persists_and_logout_clears() {
        let storage = MemoryStorage::default();
        let mut service = SessionService::restore(storage.clone());

        service.login("dev@example.com", "secret", 1700).unwrap();
        assert!(service.state().is_authenticated());
        assert_eq!(service.state().user.as_ref().unwrap().name, "dev");
        assert_eq!(service.state().organization_slug(), Some("demo-org"));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("mock-token-1700"));

        // A reload sees the same session
        let reloaded = SessionService::restore(storage.clone());
        assert_eq!(reloaded.state(), service.state());

        service.logout();
        assert!(!service.state().is_authenticated());
        assert!(storage.get(USER_KEY).is_none());
        assert!(!SessionService::restore(storage).state().is_authenticated());
    }

    #[test]
    fn test_login_rejects_empty_credentials() {
        let mut service = SessionService::restore(MemoryStorage::default());
        assert_eq!(service.login("  ", "pw", 0), Err(SessionError::EmptyCredentials));
        assert_eq!(service.login("a@b.c", "", 0), Err(SessionError::EmptyCredentials));
        assert!(!service.state().is_authenticated());
    }

    #[test]
    fn test_set_organization_persists() {
        let storage = stored_session();
        let mut service = SessionService::restore(storage.clone());
        let org = Organization { id: "9".into(), name: "Beta".into(), slug: "beta".into(), ..Default::default() };
        service.set_organization(org).unwrap();

        let org: Organization = read_json(&storage, ORGANIZATION_KEY).unwrap();
        assert_eq!(org.slug, "beta");
    }
}
