use std::sync::Arc;

use tracing::info;

use crate::catalog::fixtures::{demo_applications, demo_club_opportunities};
use crate::config::Config;
use crate::errors::Result;
use crate::session::StoredSession;
use crate::storage::{save_list, KeyValueStore, StorageKey};

/// Shared state handed to every entry point.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, config: Config) -> Self {
        AppState { store, config }
    }

    /// Session for whoever was logged in last time.
    pub fn session(&self) -> Result<StoredSession> {
        StoredSession::restore(self.store.clone())
    }

    /// Writes the demo club's listings and applications when the store holds
    /// no listings yet. Returns whether anything was written.
    pub fn seed_demo_data(&self) -> Result<bool> {
        if !self.config.seed_demo || self.store.get(StorageKey::OPPORTUNITIES)?.is_some() {
            return Ok(false);
        }
        let opportunities = demo_club_opportunities();
        let applications = demo_applications();
        save_list(self.store.as_ref(), StorageKey::OPPORTUNITIES, &opportunities)?;
        save_list(self.store.as_ref(), StorageKey::APPLICATIONS, &applications)?;
        info!(
            "Seeded demo data: {} opportunities, {} applications",
            opportunities.len(),
            applications.len()
        );
        Ok(true)
    }
}
