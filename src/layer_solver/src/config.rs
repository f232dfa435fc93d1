use serde::{Deserialize, Serialize};

/// Bounds for the stall guard. Any field missing from a config file keeps its
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Longest allowed run of consecutive moves on one side within a phase.
    pub max_same_face_run: usize,
    /// Most moves a single phase may apply.
    pub max_phase_moves: usize,
    /// Most corrective sequences a single piece may take.
    pub max_corrections: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_same_face_run: 4,
            max_phase_moves: 400,
            max_corrections: 64,
        }
    }
}
