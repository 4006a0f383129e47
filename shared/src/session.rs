//! Demo authentication and the browser-backed session it produces.
//!
//! Credentials are a hard-coded list and the token is fabricated; this is a
//! template's login, not a security boundary. What matters is that session
//! state lives in an explicit [`SessionManager`] owned by the app root with
//! a defined initialize/teardown cycle.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const USER_ROLE_KEY: &str = "user_role";
pub const USER_ID_KEY: &str = "user_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Landing page after login
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::User => "/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(AuthError::UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Please enter both username and password")]
    MissingCredentials,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Session storage unavailable: {0}")]
    Storage(String),
}

/// Username/password pair submitted from the login form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Built-in login for the demo deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    pub username: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub user_id: &'static str,
}

pub const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        username: "admin",
        password: "admin123",
        role: Role::Admin,
        user_id: "admin-001",
    },
    DemoAccount {
        username: "user",
        password: "user123",
        role: Role::User,
        user_id: "user-001",
    },
];

/// Authenticated identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub user_id: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Check `credentials` against the demo accounts and mint a token
pub fn authenticate(credentials: &Credentials, now_millis: u64) -> Result<Session, AuthError> {
    let username = credentials.username.trim();
    if username.is_empty() || credentials.password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    DEMO_ACCOUNTS
        .iter()
        .find(|account| account.username == username && account.password == credentials.password)
        .map(|account| Session {
            token: format!("mock-token-{}-{}", account.role, now_millis),
            role: account.role,
            user_id: account.user_id.to_string(),
        })
        .ok_or(AuthError::InvalidCredentials)
}

/// Where session keys are persisted: cookies first, local storage second
pub trait SessionStorage {
    fn cookie(&self, name: &str) -> Option<String>;
    fn set_cookie(&mut self, name: &str, value: &str, max_age_secs: u64) -> Result<(), AuthError>;
    fn clear_cookie(&mut self, name: &str) -> Result<(), AuthError>;
    fn local(&self, name: &str) -> Option<String>;
    fn set_local(&mut self, name: &str, value: &str) -> Result<(), AuthError>;
    fn remove_local(&mut self, name: &str);
}

/// In-memory storage for tests and for browsers without storage access
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    pub cookies: HashMap<String, String>,
    pub local: HashMap<String, String>,
}

impl SessionStorage for MemoryStorage {
    fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }

    fn set_cookie(&mut self, name: &str, value: &str, _max_age_secs: u64) -> Result<(), AuthError> {
        self.cookies.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn clear_cookie(&mut self, name: &str) -> Result<(), AuthError> {
        self.cookies.remove(name);
        Ok(())
    }

    fn local(&self, name: &str) -> Option<String> {
        self.local.get(name).cloned()
    }

    fn set_local(&mut self, name: &str, value: &str) -> Result<(), AuthError> {
        self.local.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_local(&mut self, name: &str) {
        self.local.remove(name);
    }
}

/// Value of cookie `name` in a `document.cookie` style header
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Owns the current session and keeps storage in sync with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionManager<S: SessionStorage> {
    storage: S,
    session: Option<Session>,
    max_age_secs: u64,
}

impl<S: SessionStorage> SessionManager<S> {
    pub fn new(storage: S, max_age_secs: u64) -> Self {
        Self {
            storage,
            session: None,
            max_age_secs,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Restore a session from cookies, falling back to local storage.
    ///
    /// A session found only in local storage is copied back into cookies so
    /// the route guard sees it.
    pub fn initialize(&mut self) -> Option<&Session> {
        let mut token = self.storage.cookie(AUTH_TOKEN_KEY);
        let mut role = self.storage.cookie(USER_ROLE_KEY);
        let mut user_id = self.storage.cookie(USER_ID_KEY);

        if token.is_none() {
            token = self.storage.local(AUTH_TOKEN_KEY);
            role = self.storage.local(USER_ROLE_KEY);
            user_id = self.storage.local(USER_ID_KEY);

            if let Some(token) = &token {
                let synced = [
                    (AUTH_TOKEN_KEY, Some(token.clone())),
                    (USER_ROLE_KEY, role.clone()),
                    (USER_ID_KEY, user_id.clone()),
                ];
                for (key, value) in synced {
                    let value = value.unwrap_or_default();
                    if let Err(e) = self.storage.set_cookie(key, &value, self.max_age_secs) {
                        log::warn!("could not sync {} to cookies: {}", key, e);
                    }
                }
            }
        }

        self.session = match (token, role.as_deref().map(Role::from_str)) {
            (Some(token), Some(Ok(role))) => Some(Session {
                token,
                role,
                user_id: user_id.unwrap_or_default(),
            }),
            (Some(_), Some(Err(e))) => {
                log::warn!("discarding stored session: {}", e);
                None
            }
            _ => None,
        };
        self.session.as_ref()
    }

    /// Authenticate and persist the new session in both stores.
    ///
    /// Only bad credentials fail the login.
    pub fn login(&mut self, credentials: &Credentials, now_millis: u64) -> Result<&Session, AuthError> {
        let session = authenticate(credentials, now_millis)?;
        let entries = [
            (AUTH_TOKEN_KEY, session.token.as_str()),
            (USER_ROLE_KEY, session.role.as_str()),
            (USER_ID_KEY, session.user_id.as_str()),
        ];
        for (key, value) in entries {
            // Storage failures only cost persistence; the session stays in memory
            if let Err(e) = self.storage.set_local(key, value) {
                log::warn!("could not store {} locally: {}", key, e);
            }
            if let Err(e) = self.storage.set_cookie(key, value, self.max_age_secs) {
                log::warn!("could not store {} in cookies: {}", key, e);
            }
        }
        log::info!("logged in as {} ({})", session.user_id, session.role);
        Ok(self.session.insert(session))
    }

    /// Forget the session and wipe it from both stores
    pub fn logout(&mut self) {
        for key in [AUTH_TOKEN_KEY, USER_ROLE_KEY, USER_ID_KEY] {
            self.storage.remove_local(key);
            if let Err(e) = self.storage.clear_cookie(key) {
                log::warn!("could not clear cookie {}: {}", key, e);
            }
        }
        if let Some(session) = self.session.take() {
            log::info!("logged out {}", session.user_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_demo_accounts() {
        let admin = authenticate(&Credentials::new("admin", "admin123"), 1700000000000).unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.token, "mock-token-admin-1700000000000");
        assert_eq!(admin.user_id, "admin-001");

        let user = authenticate(&Credentials::new(" user ", "user123"), 5).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_authenticate_failures() {
        assert_eq!(
            authenticate(&Credentials::new("", "x"), 0),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            authenticate(&Credentials::new("admin", "wrong"), 0),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_login_writes_both_stores_and_logout_clears() {
        let mut manager = SessionManager::new(MemoryStorage::default(), 86400);
        manager.login(&Credentials::new("user", "user123"), 42).unwrap();

        let storage = manager.storage();
        assert_eq!(storage.cookie(AUTH_TOKEN_KEY).as_deref(), Some("mock-token-user-42"));
        assert_eq!(storage.local(USER_ROLE_KEY).as_deref(), Some("user"));
        assert!(manager.is_authenticated());

        manager.logout();
        assert!(!manager.is_authenticated());
        assert!(manager.storage().cookies.is_empty());
        assert!(manager.storage().local.is_empty());
    }

    #[test]
    fn test_initialize_prefers_cookies() {
        let mut storage = MemoryStorage::default();
        storage.cookies.insert(AUTH_TOKEN_KEY.into(), "cookie-token".into());
        storage.cookies.insert(USER_ROLE_KEY.into(), "admin".into());
        storage.local.insert(AUTH_TOKEN_KEY.into(), "local-token".into());
        storage.local.insert(USER_ROLE_KEY.into(), "user".into());

        let mut manager = SessionManager::new(storage, 86400);
        let session = manager.initialize().cloned().unwrap();
        assert_eq!(session.token, "cookie-token");
        assert_eq!(session.role, Role::Admin);
    }

    #[test]
    fn test_initialize_falls_back_to_local_and_syncs_cookies() {
        let mut storage = MemoryStorage::default();
        storage.local.insert(AUTH_TOKEN_KEY.into(), "local-token".into());
        storage.local.insert(USER_ROLE_KEY.into(), "user".into());
        storage.local.insert(USER_ID_KEY.into(), "user-001".into());

        let mut manager = SessionManager::new(storage, 86400);
        assert!(manager.initialize().is_some());
        assert_eq!(
            manager.storage().cookie(AUTH_TOKEN_KEY).as_deref(),
            Some("local-token")
        );
        assert_eq!(manager.storage().cookie(USER_ID_KEY).as_deref(), Some("user-001"));
    }

    #[test]
    fn test_initialize_without_anything_is_anonymous() {
        let mut manager = SessionManager::new(MemoryStorage::default(), 86400);
        assert!(manager.initialize().is_none());

        let mut storage = MemoryStorage::default();
        storage.cookies.insert(AUTH_TOKEN_KEY.into(), "t".into());
        storage.cookies.insert(USER_ROLE_KEY.into(), "root".into());
        let mut manager = SessionManager::new(storage, 86400);
        assert!(manager.initialize().is_none());
    }

    #[test]
    fn test_parse_cookie() {
        let header = "theme=dark; auth_token=abc; user_role=admin";
        assert_eq!(parse_cookie(header, "auth_token").as_deref(), Some("abc"));
        assert_eq!(parse_cookie(header, "user_role").as_deref(), Some("admin"));
        assert_eq!(parse_cookie(header, "user_id"), None);
        assert_eq!(parse_cookie("auth_token=", "auth_token"), None);
    }
}
