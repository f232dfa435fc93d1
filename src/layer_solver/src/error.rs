use thiserror::Error;

use crate::recorder::Phase;

/// Why the stall guard aborted a phase.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StallReason {
    /// Too many consecutive moves on the same side.
    SameFaceRun,
    /// The phase applied more moves than it is allowed.
    MoveBudgetExhausted,
    /// No corrective sequence makes progress from the current state.
    NoCorrection,
    /// A single piece took more corrective sequences than it is allowed.
    CorrectionLimit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("The solver stalled during the {phase} phase: {reason:?}")]
    Stalled { phase: Phase, reason: StallReason },
    #[error("Can not run the {phase} phase before the {unmet} phase is complete")]
    PhaseOutOfOrder { phase: Phase, unmet: Phase },
}
