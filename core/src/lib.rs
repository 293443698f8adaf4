pub mod context;
pub mod patterns;
pub mod phase;
pub mod presence;
pub mod tracker;

// Re-exports for convenience
pub use context::{ConfigError, TrackerConfig, TrackerConfigExt};
pub use patterns::{Pattern, PatternCatalog, PatternStage};
pub use phase::{
    BossForm, BossLocation, BossObservation, ClassifyError, LocalPoint, Phase, TILE_SIZE, classify,
};
pub use presence::{BossPresence, PresenceError};
pub use tracker::{EncounterInstance, EncounterTracker, SignalHandler, TrackerSignal};
pub use zulrah_types::{Prayer, StandLocation};
