//! Per-encounter state
//!
//! Created when the boss appears, mutated once per tick by the tracker,
//! dropped when the boss disappears.

use zulrah_types::{Prayer, StandLocation};

use crate::patterns::Pattern;
use crate::phase::{LocalPoint, Phase};

/// Runtime state for one live encounter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterInstance<'c> {
    /// Boss position when the encounter began (reference for classification)
    start_location: LocalPoint,

    /// Stage within the current cycle
    stage: usize,

    /// Last classified phase
    phase: Option<Phase>,

    /// Identified pattern, borrowed from the catalog
    pattern: Option<&'c Pattern>,
}

impl<'c> EncounterInstance<'c> {
    pub fn new(start_location: LocalPoint) -> Self {
        Self {
            start_location,
            stage: 0,
            phase: None,
            pattern: None,
        }
    }

    pub fn start_location(&self) -> LocalPoint {
        self.start_location
    }

    pub fn stage(&self) -> usize {
        self.stage
    }

    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    pub fn pattern(&self) -> Option<&'c Pattern> {
        self.pattern
    }

    /// Prayer to use against the current phase
    pub fn recommended_response(&self) -> Option<Prayer> {
        self.phase.and_then(|phase| phase.response())
    }

    /// Phase the identified pattern expects after the current stage
    pub fn next_phase(&self) -> Option<Phase> {
        self.pattern.map(|pattern| pattern.get(self.stage + 1))
    }

    /// Where to stand during the current stage of the identified pattern
    pub fn stand_location(&self) -> Option<StandLocation> {
        self.pattern.map(|pattern| pattern.stand_location(self.stage))
    }

    // ─── Mutation (tracker only) ────────────────────────────────────────────

    pub(super) fn set_phase(&mut self, phase: Phase) {
        self.phase = Some(phase);
    }

    pub(super) fn next_stage(&mut self) {
        self.stage += 1;
    }

    pub(super) fn set_pattern(&mut self, pattern: &'c Pattern) {
        self.pattern = Some(pattern);
    }

    /// Start a new cycle: back to stage 0, identification re-armed
    pub(super) fn reset(&mut self) {
        self.stage = 0;
        self.pattern = None;
    }
}
