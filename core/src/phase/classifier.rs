//! Phase classification
//!
//! Pure mapping from a raw boss observation (plus the spawn point captured
//! when the encounter started) to a canonical [`Phase`].

use phf::phf_map;

use super::{BossForm, BossLocation, BossObservation, ClassifyError, LocalPoint, Phase, TILE_SIZE};

/// NPC variant ids for each boss form
pub mod npc_id {
    pub const ZULRAH_RANGED: u32 = 2042;
    pub const ZULRAH_MELEE: u32 = 2043;
    pub const ZULRAH_MAGIC: u32 = 2044;
}

static FORMS_BY_NPC_ID: phf::Map<u32, BossForm> = phf_map! {
    2042u32 => BossForm::Ranged,
    2043u32 => BossForm::Melee,
    2044u32 => BossForm::Magic,
};

/// Look up the boss form for an NPC variant id.
pub fn form_for_npc(npc_id: u32) -> Result<BossForm, ClassifyError> {
    FORMS_BY_NPC_ID
        .get(&npc_id)
        .copied()
        .ok_or(ClassifyError::UnknownForm { npc_id })
}

/// Locate the boss relative to its spawn point.
///
/// Offsets are `start - current`. The boss only ever surfaces at four exact
/// spots; anything else is unclassifiable.
pub fn locate(start: LocalPoint, current: LocalPoint) -> Result<BossLocation, ClassifyError> {
    let (Some(dx), Some(dy)) = (start.x.checked_sub(current.x), start.y.checked_sub(current.y))
    else {
        return Err(ClassifyError::UnknownLocation {
            dx: start.x.saturating_sub(current.x),
            dy: start.y.saturating_sub(current.y),
        });
    };

    match (dx, dy) {
        (0, 0) => Ok(BossLocation::North),
        (0, dy) if dy == 11 * TILE_SIZE => Ok(BossLocation::South),
        (dx, dy) if dx == -10 * TILE_SIZE && dy == 2 * TILE_SIZE => Ok(BossLocation::East),
        (dx, dy) if dx == 10 * TILE_SIZE && dy == 2 * TILE_SIZE => Ok(BossLocation::West),
        _ => Err(ClassifyError::UnknownLocation { dx, dy }),
    }
}

/// Classify a single observation against the encounter's spawn point.
pub fn classify(observation: &BossObservation, start: LocalPoint) -> Result<Phase, ClassifyError> {
    let form = form_for_npc(observation.npc_id)?;
    let location = locate(start, observation.position)?;

    Ok(Phase {
        location,
        form,
        jad: observation.alternating_attacks,
    })
}
