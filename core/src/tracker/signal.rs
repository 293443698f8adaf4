use crate::phase::{LocalPoint, Phase};

/// Signals emitted by the EncounterTracker on each tick.
/// These are the state changes a renderer may want to react to; the full
/// state is always readable from the tracker itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerSignal {
    // Encounter lifecycle
    EncounterStarted {
        /// Boss position at spawn (reference point for classification)
        start: LocalPoint,
    },
    EncounterEnded {
        /// Stage reached when the boss disappeared
        stage: usize,
        /// Pattern identified at that point, if any
        pattern: Option<&'static str>,
    },

    /// Boss moved into a new stage
    PhaseChanged {
        old_phase: Phase,
        new_phase: Phase,
        stage: usize,
    },

    // Pattern identification
    PatternIdentified {
        pattern: &'static str,
        stage: usize,
    },
    /// Identified pattern completed its cycle; identification re-armed
    PatternReset {
        pattern: &'static str,
    },
}
