//! Shared configuration and display types for the Zulrah tracker
//!
//! This crate contains serializable types that are shared between the
//! tracking core (zulrah-core) and whatever renders its output.

use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Display Types (consumed by the rendering layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Protection prayer recommended against the boss's current form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prayer {
    ProtectFromMagic,
    ProtectFromMissiles,
}

impl Prayer {
    pub fn label(&self) -> &'static str {
        match self {
            Prayer::ProtectFromMagic => "Protect from Magic",
            Prayer::ProtectFromMissiles => "Protect from Missiles",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the player should stand on the shrine during a stage.
///
/// Named relative to the shrine as seen from the boat dock (north is the
/// boss's spawn point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandLocation {
    TopEast,
    TopWest,
    PillarWestInside,
    PillarWestOutside,
    PillarEastInside,
    PillarEastOutside,
}

impl StandLocation {
    pub fn label(&self) -> &'static str {
        match self {
            StandLocation::TopEast => "Top East",
            StandLocation::TopWest => "Top West",
            StandLocation::PillarWestInside => "West Pillar (inside)",
            StandLocation::PillarWestOutside => "West Pillar (outside)",
            StandLocation::PillarEastInside => "East Pillar (inside)",
            StandLocation::PillarEastOutside => "East Pillar (outside)",
        }
    }
}

impl fmt::Display for StandLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tracker Configuration
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}

fn default_boss_name() -> String {
    "zulrah".to_string()
}

/// User-facing tracker settings, persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Master toggle. While false, ticks are ignored and state is frozen.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Case-insensitive substring matched against NPC names to find the boss
    #[serde(default = "default_boss_name")]
    pub boss_name: String,

    /// Show the upcoming phase once a pattern is identified
    #[serde(default = "default_true")]
    pub show_next_phase: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            boss_name: default_boss_name(),
            show_next_phase: true,
        }
    }
}
