use std::sync::Arc;

use tokio::sync::RwLock;
use zulrah_core::{BossPresence, EncounterTracker, TrackerConfig, TrackerConfigExt};

/// Tracker plus the NPC bookkeeping that feeds it.
pub struct Session {
    pub tracker: EncounterTracker<'static>,
    pub presence: BossPresence,
    /// Ticks delivered so far (including paused ones)
    pub ticks: u64,
}

impl Session {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            tracker: EncounterTracker::with_config(zulrah_core::PatternCatalog::standard(), config),
            presence: BossPresence::new(&config.boss_name),
            ticks: 0,
        }
    }
}

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the individual state types.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<TrackerConfig>>,
    pub session: Arc<RwLock<Session>>,
}

impl CliContext {
    pub fn new() -> Self {
        Self::with_config(TrackerConfig::load())
    }

    pub fn with_config(config: TrackerConfig) -> Self {
        let session = Session::new(&config);
        Self {
            config: Arc::new(RwLock::new(config)),
            session: Arc::new(RwLock::new(session)),
        }
    }

    /// Drop all encounter and NPC state, keeping the config.
    pub async fn reset_session(&self) {
        let config = self.config.read().await;
        *self.session.write().await = Session::new(&config);
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
