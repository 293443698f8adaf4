//! Encounter tracking
//!
//! The tracker is a two-state machine: no encounter, or tracking one
//! [`EncounterInstance`]. Each tick it receives the boss observation (or
//! nothing, when the boss is absent) and:
//!
//! 1. Creates an instance when the boss first appears, drops it when the boss
//!    disappears.
//! 2. Classifies the observation into a [`Phase`]; unclassifiable ticks are
//!    skipped without touching state.
//! 3. Advances the stage when the phase differs from the previous one.
//! 4. On each stage transition, identifies the pattern or checks whether the
//!    identified pattern's cycle has completed.

pub mod handler;
pub mod identify;
pub mod instance;
pub mod signal;


pub use handler::SignalHandler;
pub use identify::Resolution;
pub use instance::EncounterInstance;
pub use signal::TrackerSignal;

use tracing::{debug, info};
use zulrah_types::{Prayer, StandLocation, TrackerConfig};

use crate::patterns::{Pattern, PatternCatalog};
use crate::phase::{BossObservation, Phase, classify};

/// Owns the live encounter (if any) and drives it tick by tick.
#[derive(Debug)]
pub struct EncounterTracker<'c> {
    catalog: &'c PatternCatalog,
    enabled: bool,
    instance: Option<EncounterInstance<'c>>,
}

impl EncounterTracker<'static> {
    /// Tracker over the four known rotations
    pub fn standard() -> Self {
        Self::new(PatternCatalog::standard())
    }
}

impl<'c> EncounterTracker<'c> {
    pub fn new(catalog: &'c PatternCatalog) -> Self {
        Self {
            catalog,
            enabled: true,
            instance: None,
        }
    }

    pub fn with_config(catalog: &'c PatternCatalog, config: &TrackerConfig) -> Self {
        let mut tracker = Self::new(catalog);
        tracker.apply_config(config);
        tracker
    }

    pub fn apply_config(&mut self, config: &TrackerConfig) {
        self.set_enabled(config.enabled);
    }

    pub fn catalog(&self) -> &'c PatternCatalog {
        self.catalog
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pause or resume tick processing. Pausing keeps the current encounter.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            debug!(enabled, "Tracking toggled");
        }
        self.enabled = enabled;
    }

    /// Process one tick. `boss` is `None` when the boss is not present.
    pub fn tick(&mut self, boss: Option<&BossObservation>) -> Vec<TrackerSignal> {
        if !self.enabled {
            return Vec::new();
        }

        let Some(observation) = boss else {
            return self.end_encounter().into_iter().collect();
        };

        let mut signals = Vec::new();

        let mut started = false;
        let instance = self.instance.get_or_insert_with(|| {
            started = true;
            EncounterInstance::new(observation.position)
        });
        if started {
            info!(x = observation.position.x, y = observation.position.y, "Encounter has started");
            signals.push(TrackerSignal::EncounterStarted {
                start: observation.position,
            });
        }

        let phase = match classify(observation, instance.start_location()) {
            Ok(phase) => phase,
            Err(err) => {
                debug!(error = %err, npc_id = observation.npc_id, "Skipping unclassifiable observation");
                return signals;
            }
        };

        let Some(previous) = instance.phase() else {
            instance.set_phase(phase);
            return signals;
        };
        if previous == phase {
            return signals;
        }

        instance.set_phase(phase);
        instance.next_stage();
        let stage = instance.stage();
        debug!(from = %previous, to = %phase, stage, "Phase has moved");
        signals.push(TrackerSignal::PhaseChanged {
            old_phase: previous,
            new_phase: phase,
            stage,
        });

        match identify::resolve(self.catalog, instance) {
            Some(Resolution::Identified(pattern)) => {
                info!(pattern = pattern.id(), stage, "Pattern identified");
                signals.push(TrackerSignal::PatternIdentified {
                    pattern: pattern.id(),
                    stage,
                });
            }
            Some(Resolution::Reset(pattern)) => {
                debug!(pattern = pattern.id(), "Pattern has reset");
                signals.push(TrackerSignal::PatternReset {
                    pattern: pattern.id(),
                });
            }
            None => {}
        }

        signals
    }

    fn end_encounter(&mut self) -> Option<TrackerSignal> {
        let instance = self.instance.take()?;
        let pattern = instance.pattern().map(Pattern::id);
        info!(stage = instance.stage(), pattern = ?pattern, "Encounter has ended");
        Some(TrackerSignal::EncounterEnded {
            stage: instance.stage(),
            pattern,
        })
    }

    // ─── Read interface ─────────────────────────────────────────────────────

    /// The live encounter, if the boss is present
    pub fn instance(&self) -> Option<&EncounterInstance<'c>> {
        self.instance.as_ref()
    }

    pub fn current_phase(&self) -> Option<Phase> {
        self.instance.as_ref().and_then(EncounterInstance::phase)
    }

    /// Current stage (0 when no encounter is live)
    pub fn current_stage(&self) -> usize {
        self.instance.as_ref().map_or(0, EncounterInstance::stage)
    }

    pub fn matched_pattern(&self) -> Option<&'c Pattern> {
        self.instance.as_ref().and_then(EncounterInstance::pattern)
    }

    pub fn recommended_response(&self) -> Option<Prayer> {
        self.instance
            .as_ref()
            .and_then(EncounterInstance::recommended_response)
    }

    pub fn next_phase(&self) -> Option<Phase> {
        self.instance.as_ref().and_then(EncounterInstance::next_phase)
    }

    pub fn stand_location(&self) -> Option<StandLocation> {
        self.instance
            .as_ref()
            .and_then(EncounterInstance::stand_location)
    }
}
