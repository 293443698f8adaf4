//! The four known rotations
//!
//! Every rotation opens with the ranged form at the spawn point, so
//! identification can only begin at stage 1.

use zulrah_types::StandLocation::{
    self, PillarEastInside, PillarEastOutside, PillarWestInside, PillarWestOutside, TopEast, TopWest,
};

use super::{Pattern, PatternStage};
use crate::phase::BossForm::{self, Magic, Melee, Ranged};
use crate::phase::BossLocation::{self, East, North, South, West};
use crate::phase::Phase;

const fn stage(location: BossLocation, form: BossForm, stand: StandLocation) -> PatternStage {
    PatternStage::new(Phase::new(location, form), stand)
}

const fn jad(location: BossLocation, form: BossForm, stand: StandLocation) -> PatternStage {
    PatternStage::new(Phase::jad(location, form), stand)
}

// ─────────────────────────────────────────────────────────────────────────────
// Magma openings (melee at stage 1)
// ─────────────────────────────────────────────────────────────────────────────

static PATTERN_A: [PatternStage; 10] = [
    stage(North, Ranged, TopEast),
    stage(North, Melee, TopEast),
    stage(North, Magic, PillarWestInside),
    stage(South, Ranged, PillarWestInside),
    stage(North, Melee, PillarWestInside),
    stage(West, Magic, PillarWestInside),
    stage(South, Ranged, PillarEastOutside),
    stage(South, Magic, PillarWestInside),
    jad(West, Ranged, PillarWestInside),
    stage(North, Melee, TopEast),
];

static PATTERN_B: [PatternStage; 10] = [
    stage(North, Ranged, TopEast),
    stage(North, Melee, TopEast),
    stage(North, Magic, PillarWestInside),
    stage(West, Ranged, PillarWestInside),
    stage(South, Magic, PillarWestInside),
    stage(North, Melee, PillarEastInside),
    stage(East, Ranged, PillarEastInside),
    stage(South, Magic, PillarWestInside),
    jad(West, Ranged, PillarWestInside),
    stage(North, Melee, TopEast),
];

// ─────────────────────────────────────────────────────────────────────────────
// Serpentine opening (ranged east at stage 1)
// ─────────────────────────────────────────────────────────────────────────────

static PATTERN_C: [PatternStage; 11] = [
    stage(North, Ranged, TopEast),
    stage(East, Ranged, TopEast),
    stage(North, Melee, TopWest),
    stage(West, Magic, TopWest),
    stage(South, Ranged, PillarEastOutside),
    stage(East, Magic, PillarEastOutside),
    stage(North, Ranged, TopWest),
    stage(West, Ranged, TopWest),
    stage(North, Magic, TopEast),
    jad(East, Magic, TopEast),
    stage(North, Magic, TopEast),
];

// ─────────────────────────────────────────────────────────────────────────────
// Tanzanite opening (magic east at stage 1)
// ─────────────────────────────────────────────────────────────────────────────

static PATTERN_D: [PatternStage; 12] = [
    stage(North, Ranged, TopEast),
    stage(East, Magic, TopEast),
    stage(South, Ranged, PillarWestInside),
    stage(West, Magic, PillarWestInside),
    stage(North, Melee, PillarEastOutside),
    stage(East, Ranged, PillarEastOutside),
    stage(South, Ranged, PillarWestOutside),
    stage(West, Magic, PillarWestOutside),
    stage(North, Ranged, TopEast),
    stage(North, Magic, TopEast),
    jad(East, Magic, TopEast),
    stage(North, Magic, TopEast),
];

/// Build the standard rotation set, in catalog order
pub fn standard_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new("A", PATTERN_A),
        Pattern::new("B", PATTERN_B),
        Pattern::new("C", PATTERN_C),
        Pattern::new("D", PATTERN_D),
    ]
}
