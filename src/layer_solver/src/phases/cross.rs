use log::trace;

use crate::{
    error::{SolverError, StallReason},
    pieces::{EdgeSlot, cross_solved, edge_solved, locate_edge},
    search::iddfs,
    solver::LayerSolver,
    working,
};

/// Any Down edge reaches the Up layer within this many moves without
/// disturbing the placed ones.
const LIFT_DEPTH: usize = 3;
/// An Up edge drops into its Down slot within this many moves.
const INSERT_DEPTH: usize = 4;

impl LayerSolver<'_> {
    /// Places the Down edges one by one. An edge that is not in the Up layer
    /// is first lifted there, so every insertion starts from the same layer.
    pub(crate) fn solve_cross(&mut self) -> Result<(), SolverError> {
        for (placed, edge) in EdgeSlot::CROSS.into_iter().enumerate() {
            let mut corrections = 0;

            while !edge_solved(self.cube(), edge) {
                self.correction(&mut corrections)?;

                let location = self.find_edge(edge)?;
                trace!(working!("Placing {:?} from {:?}"), edge, location);

                let found = if location.is_up() {
                    iddfs(self.cube(), INSERT_DEPTH, |cube| {
                        edge_solved(cube, edge) && cross_solved(cube, placed)
                    })
                } else {
                    iddfs(self.cube(), LIFT_DEPTH, |cube| {
                        locate_edge(cube, edge).is_some_and(EdgeSlot::is_up)
                            && cross_solved(cube, placed)
                    })
                };

                let moves = found.ok_or_else(|| self.stall(StallReason::NoCorrection))?;
                self.apply(&moves)?;
            }
        }

        Ok(())
    }
}
