//! Boss phases
//!
//! A phase is one discrete stance the boss takes for the duration of a stage:
//! where it surfaced, which form it surfaced in, and whether it is the
//! alternating-attack ("Jad") form. Phases are plain values; two observations
//! of the same physical configuration classify to equal phases.

mod classifier;
mod error;

pub use classifier::*;
pub use error::*;

use std::fmt;

use zulrah_types::Prayer;

/// Size of one game tile in local coordinate units
pub const TILE_SIZE: i32 = 128;

/// Position in scene-local coordinates (128 units per tile)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LocalPoint {
    pub x: i32,
    pub y: i32,
}

impl LocalPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a whole number of tiles
    pub const fn offset_tiles(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx * TILE_SIZE,
            y: self.y + dy * TILE_SIZE,
        }
    }
}

/// The boss's combat form, determined by which NPC variant is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BossForm {
    /// Green serpentine form
    Ranged,
    /// Red magma form
    Melee,
    /// Blue tanzanite form
    Magic,
}

impl BossForm {
    /// Protection prayer this form demands (melee is dodged, not prayed)
    pub fn prayer(&self) -> Option<Prayer> {
        match self {
            BossForm::Ranged => Some(Prayer::ProtectFromMissiles),
            BossForm::Magic => Some(Prayer::ProtectFromMagic),
            BossForm::Melee => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BossForm::Ranged => "Ranged",
            BossForm::Melee => "Melee",
            BossForm::Magic => "Magic",
        }
    }
}

/// Where the boss surfaced, relative to its spawn point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BossLocation {
    North,
    South,
    East,
    West,
}

impl BossLocation {
    pub fn label(&self) -> &'static str {
        match self {
            BossLocation::North => "North",
            BossLocation::South => "South",
            BossLocation::East => "East",
            BossLocation::West => "West",
        }
    }
}

/// One classified boss stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phase {
    pub location: BossLocation,
    pub form: BossForm,
    /// Alternating-attack form. Never has a recommended prayer.
    pub jad: bool,
}

impl Phase {
    pub const fn new(location: BossLocation, form: BossForm) -> Self {
        Self {
            location,
            form,
            jad: false,
        }
    }

    pub const fn jad(location: BossLocation, form: BossForm) -> Self {
        Self {
            location,
            form,
            jad: true,
        }
    }

    pub fn is_jad(&self) -> bool {
        self.jad
    }

    /// Recommended protection prayer for this phase, if any
    pub fn response(&self) -> Option<Prayer> {
        if self.jad {
            return None;
        }
        self.form.prayer()
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.jad {
            write!(f, "Jad {} ({})", self.form.label(), self.location.label())
        } else {
            write!(f, "{} ({})", self.form.label(), self.location.label())
        }
    }
}

/// What the host sees of the boss on a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossObservation {
    /// NPC variant id (selects the form)
    pub npc_id: u32,
    /// Current position of the boss
    pub position: LocalPoint,
    /// Boss is alternating between ranged and magic attacks
    pub alternating_attacks: bool,
}

impl BossObservation {
    pub fn new(npc_id: u32, position: LocalPoint) -> Self {
        Self {
            npc_id,
            position,
            alternating_attacks: false,
        }
    }

    pub fn alternating(mut self) -> Self {
        self.alternating_attacks = true;
        self
    }
}
