//! Pattern catalog
//!
//! A pattern is one known rotation of the encounter: an ordered list of
//! stages, each with the phase the boss takes and where the player should
//! stand. The catalog is the fixed set of all known patterns.
//!
//! Stage lookups wrap modulo the pattern length. Rotations repeat after
//! their last stage, so `stage == len` is the first stage of the next cycle.

mod standard;

use std::sync::LazyLock;

use zulrah_types::StandLocation;

use crate::phase::Phase;

pub use standard::standard_patterns;

/// One stage of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternStage {
    pub phase: Phase,
    pub stand: StandLocation,
}

impl PatternStage {
    pub const fn new(phase: Phase, stand: StandLocation) -> Self {
        Self { phase, stand }
    }
}

/// A complete known rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    id: &'static str,
    stages: Vec<PatternStage>,
}

impl Pattern {
    /// Build a pattern from its stages.
    ///
    /// # Panics
    /// If `stages` is empty.
    pub fn new(id: &'static str, stages: impl Into<Vec<PatternStage>>) -> Self {
        let stages = stages.into();
        assert!(!stages.is_empty(), "pattern '{id}' has no stages");
        Self { id, stages }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Cycle length
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false; patterns are non-empty by construction
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn stages(&self) -> &[PatternStage] {
        &self.stages
    }

    /// Stage data at `stage`, wrapping past the end of the cycle
    pub fn stage(&self, stage: usize) -> &PatternStage {
        &self.stages[stage % self.stages.len()]
    }

    /// Expected phase at `stage`
    pub fn get(&self, stage: usize) -> Phase {
        self.stage(stage).phase
    }

    /// Recommended stand location at `stage`
    pub fn stand_location(&self, stage: usize) -> StandLocation {
        self.stage(stage).stand
    }

    /// Whether this pattern expects exactly `phase` at `stage`
    pub fn stage_matches(&self, stage: usize, phase: Phase) -> bool {
        self.get(stage) == phase
    }

    /// Whether `stage` may be the start of a fresh cycle
    pub fn can_reset(&self, stage: usize) -> bool {
        stage >= self.stages.len()
    }
}

static STANDARD_CATALOG: LazyLock<PatternCatalog> =
    LazyLock::new(|| PatternCatalog::new(standard_patterns()));

/// Immutable set of known patterns
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// # Panics
    /// If `patterns` is empty or two patterns share an id.
    pub fn new(patterns: Vec<Pattern>) -> Self {
        assert!(!patterns.is_empty(), "pattern catalog is empty");
        for (i, pattern) in patterns.iter().enumerate() {
            assert!(
                patterns[..i].iter().all(|p| p.id != pattern.id),
                "duplicate pattern id '{}'",
                pattern.id
            );
        }
        Self { patterns }
    }

    /// The four known rotations, built once per process
    pub fn standard() -> &'static PatternCatalog {
        &STANDARD_CATALOG
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Find a pattern by id
    pub fn get(&self, id: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    /// Patterns that expect exactly `phase` at `stage`
    pub fn stage_matches(&self, stage: usize, phase: Phase) -> impl Iterator<Item = &Pattern> {
        self.patterns
            .iter()
            .filter(move |p| p.stage_matches(stage, phase))
    }
}
