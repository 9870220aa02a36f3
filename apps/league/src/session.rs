use std::sync::Arc;

use tracing::info;

use crate::errors::{AppError, Result};
use crate::models::UserProfile;
use crate::storage::{load_value, save_value, KeyValueStore, StorageKey};

/// Holds the logged-in user. Passed explicitly to everything that needs one.
pub trait AuthSession {
    fn current_user(&self) -> Option<&UserProfile>;
    fn login(&mut self, user: UserProfile) -> Result<()>;
    fn logout(&mut self) -> Result<()>;

    fn require_user(&self) -> Result<&UserProfile> {
        self.current_user().ok_or(AppError::Unauthorized)
    }
}

/// Session persisted under `anchrd_user` so it survives a restart.
pub struct StoredSession {
    store: Arc<dyn KeyValueStore>,
    user: Option<UserProfile>,
}

impl StoredSession {
    /// Empty session; nothing is read from the store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        StoredSession { store, user: None }
    }

    /// Picks up the user saved by a previous login, if any.
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let user: Option<UserProfile> = load_value(store.as_ref(), StorageKey::CURRENT_USER)?;
        if let Some(user) = &user {
            info!("Restored session for {}", user.id);
        }
        Ok(StoredSession { store, user })
    }
}

impl AuthSession for StoredSession {
    fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    fn login(&mut self, user: UserProfile) -> Result<()> {
        save_value(self.store.as_ref(), StorageKey::CURRENT_USER, &user)?;
        info!("User {} logged in ({})", user.id, user.kind());
        self.user = Some(user);
        Ok(())
    }

    fn logout(&mut self) -> Result<()> {
        self.store.remove(StorageKey::CURRENT_USER)?;
        if let Some(user) = self.user.take() {
            info!("User {} logged out", user.id);
        }
        Ok(())
    }
}
