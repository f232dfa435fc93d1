use log::{debug, info};
use rubik_core::{Cube, Move, format_sequence};

use crate::{
    config::SolverConfig,
    error::{SolverError, StallReason},
    recorder::{MoveRecorder, Phase, PhaseTracker},
    stall::StallGuard,
    start, success,
};

/// Solves a cube layer by layer, one phase at a time, recording every move it
/// applies. A stalled solve leaves the cube wherever it got to.
pub struct LayerSolver<'a> {
    cube: &'a mut Cube,
    config: SolverConfig,
    recorder: MoveRecorder,
    guard: StallGuard,
    phase: Phase,
}

impl<'a> LayerSolver<'a> {
    pub fn new(cube: &'a mut Cube) -> LayerSolver<'a> {
        LayerSolver::with_config(cube, SolverConfig::default())
    }

    pub fn with_config(cube: &'a mut Cube, config: SolverConfig) -> LayerSolver<'a> {
        let guard = StallGuard::new(&config);

        LayerSolver {
            cube,
            config,
            recorder: MoveRecorder::default(),
            guard,
            phase: Phase::Cross,
        }
    }

    /// Runs every phase in order.
    ///
    /// # Errors
    ///
    /// If any phase stalls. Later phases are not attempted.
    pub fn solve(&mut self) -> Result<(), SolverError> {
        for phase in Phase::ALL {
            self.solve_phase(phase)?;
        }

        Ok(())
    }

    /// Runs a single phase. Does nothing if its goal already holds.
    ///
    /// # Errors
    ///
    /// If the previous phase's goal does not hold, before any move is applied,
    /// or if the phase stalls.
    pub fn solve_phase(&mut self, phase: Phase) -> Result<(), SolverError> {
        if let Some(unmet) = phase.previous() {
            if !unmet.is_complete(&*self.cube) {
                return Err(SolverError::PhaseOutOfOrder { phase, unmet });
            }
        }

        info!(start!("Solving the {} phase"), phase);

        self.phase = phase;
        self.guard.reset();

        match phase {
            Phase::Cross => self.solve_cross()?,
            Phase::FirstLayerCorners => self.solve_first_layer_corners()?,
            Phase::MiddleEdges => self.solve_middle_edges()?,
            Phase::LastLayerCross => self.solve_last_layer_cross()?,
            Phase::LastLayer => self.solve_last_layer()?,
        }

        debug_assert!(phase.is_complete(&*self.cube));

        info!(
            success!("The {} phase took {} moves"),
            phase,
            self.recorder.tracker().count(phase)
        );

        Ok(())
    }

    /// The recorded moves, raw or normalized.
    #[must_use]
    pub fn rotations(&self, normalized: bool) -> Vec<Move> {
        self.recorder.rotations(normalized)
    }

    #[must_use]
    pub fn total_rotations(&self) -> usize {
        self.recorder.len()
    }

    #[must_use]
    pub fn phase_rotations(&self, phase: Phase) -> usize {
        self.recorder.tracker().count(phase)
    }

    #[must_use]
    pub fn tracker(&self) -> &PhaseTracker {
        self.recorder.tracker()
    }

    #[must_use]
    pub fn cube(&self) -> &Cube {
        &*self.cube
    }

    pub(crate) fn stall(&self, reason: StallReason) -> SolverError {
        SolverError::Stalled {
            phase: self.phase,
            reason,
        }
    }

    /// Applies and records `moves` one at a time, stopping at the first one
    /// the stall guard refuses.
    pub(crate) fn apply(&mut self, moves: &[Move]) -> Result<(), SolverError> {
        if moves.is_empty() {
            return Ok(());
        }

        debug!("{}: {}", self.phase, format_sequence(moves));

        for &move_ in moves {
            self.guard.admit(move_).map_err(|reason| self.stall(reason))?;
            self.cube.rotate(move_);
            self.recorder.record(self.phase, move_);
        }

        Ok(())
    }

    /// Counts one more corrective step for the current piece.
    pub(crate) fn correction(&self, taken: &mut usize) -> Result<(), SolverError> {
        *taken += 1;

        if *taken > self.config.max_corrections {
            return Err(self.stall(StallReason::CorrectionLimit));
        }

        Ok(())
    }
}
