//! Error types for phase classification

use thiserror::Error;

/// An observation that cannot be mapped to a known phase.
///
/// Always recoverable: the tracker treats the tick as carrying no new
/// information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("unknown boss form for npc id {npc_id}")]
    UnknownForm { npc_id: u32 },

    #[error("unknown boss location: offset ({dx}, {dy}) from spawn")]
    UnknownLocation { dx: i32, dy: i32 },
}
