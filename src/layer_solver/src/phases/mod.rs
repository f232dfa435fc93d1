//! The five phases, each an `impl` block on [`LayerSolver`]. Every phase
//! loops until its goal holds, picking one corrective sequence per iteration
//! from the current state.

use rubik_core::{Move, Side};

use crate::{
    error::{SolverError, StallReason},
    pieces::{CornerSlot, EdgeSlot, SLOTS, Slot, locate_corner, locate_edge},
    solver::LayerSolver,
};

mod corners;
mod cross;
mod last_layer;
mod middle;

pub(crate) const fn cw(side: Side) -> Move {
    Move::clockwise(side)
}

pub(crate) const fn ccw(side: Side) -> Move {
    Move::counter_clockwise(side)
}

pub(crate) const fn half(side: Side) -> Move {
    Move::half_turn(side)
}

impl LayerSolver<'_> {
    pub(crate) fn find_edge(&self, piece: EdgeSlot) -> Result<EdgeSlot, SolverError> {
        locate_edge(self.cube(), piece).ok_or_else(|| self.stall(StallReason::NoCorrection))
    }

    pub(crate) fn find_corner(&self, piece: CornerSlot) -> Result<CornerSlot, SolverError> {
        locate_corner(self.cube(), piece).ok_or_else(|| self.stall(StallReason::NoCorrection))
    }

    /// The first-layer slot matching `holds`, used to find which slot a
    /// misplaced piece is stuck in.
    fn slot_holding(&self, holds: impl Fn(&Slot) -> bool) -> Result<Slot, SolverError> {
        SLOTS
            .into_iter()
            .find(|slot| holds(slot))
            .ok_or_else(|| self.stall(StallReason::NoCorrection))
    }
}
