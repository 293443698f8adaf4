//! Pattern identification and cycle reset.
//!
//! Runs on every stage transition. Until a pattern is identified, the
//! catalog is filtered to the patterns consistent with the current stage and
//! phase; a match is committed only when exactly one candidate remains. Once
//! identified, the pattern is kept until its cycle completes.

use crate::patterns::{Pattern, PatternCatalog};
use crate::phase::Phase;

use super::EncounterInstance;

/// What happened to the instance's pattern on a stage transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'c> {
    /// A single pattern is consistent with the observation; now committed
    Identified(&'c Pattern),
    /// The committed pattern completed its cycle and was cleared
    Reset(&'c Pattern),
}

/// The single pattern expecting `phase` at `stage`, or `None` if zero or
/// several patterns do.
pub fn identify(catalog: &PatternCatalog, stage: usize, phase: Phase) -> Option<&Pattern> {
    let mut candidates = catalog.stage_matches(stage, phase);
    let only = candidates.next()?;
    candidates.next().is_none().then_some(only)
}

/// Whether the instance has completed a full cycle of `pattern`
pub fn cycle_complete(pattern: &Pattern, instance: &EncounterInstance<'_>) -> bool {
    pattern.can_reset(instance.stage())
        && instance
            .phase()
            .is_none_or(|phase| phase == pattern.get(0))
}

/// Advance pattern bookkeeping after a stage transition.
pub(super) fn resolve<'c>(
    catalog: &'c PatternCatalog,
    instance: &mut EncounterInstance<'c>,
) -> Option<Resolution<'c>> {
    match instance.pattern() {
        None => {
            let phase = instance.phase()?;
            let pattern = identify(catalog, instance.stage(), phase)?;
            instance.set_pattern(pattern);
            Some(Resolution::Identified(pattern))
        }
        Some(pattern) if cycle_complete(pattern, instance) => {
            instance.reset();
            Some(Resolution::Reset(pattern))
        }
        Some(_) => None,
    }
}
