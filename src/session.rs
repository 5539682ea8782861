//! Mock sign-in, persisted the way a browser would keep it in local storage.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use crate::domain::{User, UserPatch};

/// Key the logged-in user is stored under.
pub const USER_KEY: &str = "skfood_user";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session store I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Session store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("Not logged in")]
    NotLoggedIn,
}

/// String key-value store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), SessionError> {
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.read_all()?.remove(key))
    }

    pub fn set(&self, key: &str, value: String) -> Result<(), SessionError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value);
        self.write_all(&entries)
    }

    pub fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

pub struct AuthSession {
    store: LocalStore,
    delay: Duration,
    user: Option<User>,
}

impl AuthSession {
    pub fn new(store: LocalStore, delay: Duration) -> Self {
        Self { store, delay, user: None }
    }

    /// Loads a previously saved user. A corrupt record is discarded.
    #[instrument(skip(self))]
    pub fn restore(&mut self) -> Result<Option<&User>, SessionError> {
        self.user = match self.store.get(USER_KEY)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!(user_id = %user.id, "Session restored");
                    Some(user)
                }
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable session");
                    self.store.remove(USER_KEY)?;
                    None
                }
            },
            None => {
                debug!("No saved session");
                None
            }
        };
        Ok(self.user.as_ref())
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Accepts any credentials after the simulated round trip.
    #[instrument(skip(self, _password))]
    pub async fn login(&mut self, email: &str, _password: &str) -> Result<&User, SessionError> {
        tokio::time::sleep(self.delay).await;
        let name = email.split('@').next().unwrap_or(email);
        self.sign_in(User::new("1", email, name))
    }

    #[instrument(skip(self, _password))]
    pub async fn register(&mut self, email: &str, _password: &str, name: &str) -> Result<&User, SessionError> {
        tokio::time::sleep(self.delay).await;
        let id = chrono::Utc::now().timestamp_millis().to_string();
        self.sign_in(User::new(id, email, name))
    }

    pub fn update_profile(&mut self, patch: UserPatch) -> Result<&User, SessionError> {
        let mut user = self.user.clone().ok_or(SessionError::NotLoggedIn)?;
        user.apply(patch);
        self.sign_in(user)
    }

    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.user = None;
        self.store.remove(USER_KEY)?;
        info!("Logged out");
        Ok(())
    }

    fn sign_in(&mut self, user: User) -> Result<&User, SessionError> {
        self.store.set(USER_KEY, serde_json::to_string(&user)?)?;
        info!(user_id = %user.id, "Signed in");
        Ok(&*self.user.insert(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_in(dir: &tempfile::TempDir) -> AuthSession {
        AuthSession::new(LocalStore::new(dir.path().join("session.json")), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_login_persists_and_restores() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        let user = session.login("asha@example.com", "secret").await.unwrap().clone();
        assert_eq!(user.name, "asha");
        assert_eq!(user.id, "1");

        let mut reopened = session_in(&dir);
        assert_eq!(reopened.restore().unwrap(), Some(&user));
    }

    #[tokio::test]
    async fn test_logout_clears_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        session.register("ravi@example.com", "pw", "Ravi").await.unwrap();
        session.logout().unwrap();

        assert!(!session.is_logged_in());
        let store = LocalStore::new(dir.path().join("session.json"));
        assert_eq!(store.get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_update_profile_requires_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        let patch = UserPatch { phone: Some("98765".into()), ..UserPatch::default() };
        assert!(matches!(session.update_profile(patch), Err(SessionError::NotLoggedIn)));
    }

    #[test]
    fn test_corrupt_record_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("session.json"));
        store.set(USER_KEY, "{not json".into()).unwrap();

        let mut session = session_in(&dir);
        assert_eq!(session.restore().unwrap(), None);
        assert_eq!(store.get(USER_KEY).unwrap(), None);
    }
}
