//! Boss presence detection
//!
//! Turns the host's NPC spawn / update / despawn events into the per-tick
//! boss observation the tracker consumes. The boss is recognised by name.

use thiserror::Error;
use tracing::{debug, warn};

use crate::phase::BossObservation;

/// Errors while inspecting NPC events
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresenceError {
    #[error("npc {index} has no readable name")]
    MissingName { index: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrackedBoss {
    index: u32,
    observation: BossObservation,
}

/// Tracks which NPC (if any) is the boss.
#[derive(Debug, Clone)]
pub struct BossPresence {
    /// Lowercased name fragment identifying the boss
    needle: String,
    boss: Option<TrackedBoss>,
}

impl BossPresence {
    pub fn new(boss_name: &str) -> Self {
        Self {
            needle: boss_name.to_lowercase(),
            boss: None,
        }
    }

    /// Whether an NPC name refers to the boss.
    pub fn is_boss_name(&self, index: u32, name: Option<&str>) -> Result<bool, PresenceError> {
        let name = name.ok_or(PresenceError::MissingName { index })?;
        Ok(name.to_lowercase().contains(&self.needle))
    }

    /// An NPC spawned. Returns true if it is now the tracked boss.
    pub fn on_npc_spawned(
        &mut self,
        index: u32,
        name: Option<&str>,
        observation: BossObservation,
    ) -> Result<bool, PresenceError> {
        if !self.is_boss_name(index, name)? {
            return Ok(false);
        }
        debug!(index, npc_id = observation.npc_id, "Boss spawned");
        self.boss = Some(TrackedBoss { index, observation });
        Ok(true)
    }

    /// A tracked NPC changed form or position. Ignored for other NPCs.
    pub fn on_npc_changed(&mut self, index: u32, observation: BossObservation) -> bool {
        match self.boss.as_mut() {
            Some(boss) if boss.index == index => {
                boss.observation = observation;
                true
            }
            _ => false,
        }
    }

    /// An NPC despawned. Returns true if it was the tracked boss.
    ///
    /// The tracked index is cleared even when its name can no longer be read.
    pub fn on_npc_despawned(&mut self, index: u32, name: Option<&str>) -> Result<bool, PresenceError> {
        match self.boss {
            Some(boss) if boss.index == index => {
                debug!(index, "Boss despawned");
                self.boss = None;
                Ok(true)
            }
            _ => {
                self.is_boss_name(index, name)?;
                Ok(false)
            }
        }
    }

    /// Boss observation for the current tick, `None` if the boss is absent
    pub fn observation(&self) -> Option<&BossObservation> {
        self.boss.as_ref().map(|boss| &boss.observation)
    }

    pub fn is_present(&self) -> bool {
        self.boss.is_some()
    }
}

/// Log and swallow a presence error; the event is treated as irrelevant.
pub fn log_presence_error(result: Result<bool, PresenceError>) -> bool {
    result.unwrap_or_else(|err| {
        warn!(error = %err, "Ignoring npc event");
        false
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::LocalPoint;
    use crate::phase::npc_id::{ZULRAH_MAGIC, ZULRAH_RANGED};
    use crate::tracker::{EncounterTracker, TrackerSignal};

    fn obs(npc_id: u32) -> BossObservation {
        BossObservation::new(npc_id, LocalPoint::new(6720, 7616))
    }

    #[test]
    fn boss_name_match_is_case_insensitive() {
        let presence = BossPresence::new("Zulrah");
        assert_eq!(presence.is_boss_name(1, Some("ZULRAH")), Ok(true));
        assert_eq!(presence.is_boss_name(1, Some("zulrah")), Ok(true));
        assert_eq!(presence.is_boss_name(1, Some("Snakeling")), Ok(false));
    }

    #[test]
    fn missing_name_is_an_error_not_a_match() {
        let mut presence = BossPresence::new("zulrah");
        assert_eq!(
            presence.on_npc_spawned(7, None, obs(ZULRAH_RANGED)),
            Err(PresenceError::MissingName { index: 7 })
        );
        assert!(!presence.is_present());
        assert!(!log_presence_error(presence.on_npc_despawned(7, None)));
    }

    #[test]
    fn spawn_update_despawn() {
        let mut presence = BossPresence::new("zulrah");
        assert_eq!(presence.on_npc_spawned(3, Some("Zulrah"), obs(ZULRAH_RANGED)), Ok(true));
        assert_eq!(presence.observation().map(|o| o.npc_id), Some(ZULRAH_RANGED));

        assert!(presence.on_npc_changed(3, obs(ZULRAH_MAGIC)));
        assert!(!presence.on_npc_changed(4, obs(ZULRAH_RANGED)));
        assert_eq!(presence.observation().map(|o| o.npc_id), Some(ZULRAH_MAGIC));

        assert_eq!(presence.on_npc_despawned(3, Some("Zulrah")), Ok(true));
        assert!(presence.observation().is_none());
    }

    #[test]
    fn tracked_boss_despawns_without_readable_name() {
        let mut presence = BossPresence::new("zulrah");
        let mut tracker = EncounterTracker::standard();
        presence
            .on_npc_spawned(3, Some("Zulrah"), obs(ZULRAH_RANGED))
            .unwrap();
        tracker.tick(presence.observation());
        assert!(tracker.instance().is_some());

        assert_eq!(presence.on_npc_despawned(3, None), Ok(true));
        assert!(!presence.is_present());

        let signals = tracker.tick(presence.observation());
        assert!(tracker.instance().is_none());
        assert!(matches!(signals.as_slice(), [TrackerSignal::EncounterEnded { stage: 0, .. }]));
    }

    #[test]
    fn other_npc_despawn_keeps_boss() {
        let mut presence = BossPresence::new("zulrah");
        presence
            .on_npc_spawned(3, Some("Zulrah"), obs(ZULRAH_RANGED))
            .unwrap();

        assert_eq!(presence.on_npc_despawned(9, Some("Snakeling")), Ok(false));
        assert_eq!(presence.on_npc_despawned(9, Some("Zulrah")), Ok(false));
        assert!(presence.is_present());
    }
}
