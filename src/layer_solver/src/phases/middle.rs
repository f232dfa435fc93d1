use itertools::Itertools;
use rubik_core::{Move, Side::Up};

use super::{ccw, cw};
use crate::{
    error::{SolverError, StallReason},
    pieces::{SLOTS, Slot, edge_solved, first_two_layers_solved},
    search::{after, up_turns},
    solver::LayerSolver,
};

/// Drops the edge at the front of Up into the slot from the front.
fn right_insert(slot: &Slot) -> [Move; 8] {
    let (f, r) = (slot.front, slot.right);
    [cw(Up), cw(r), ccw(Up), ccw(r), ccw(Up), ccw(f), cw(Up), cw(f)]
}

/// Drops the edge at the right of Up into the slot from the right.
fn left_insert(slot: &Slot) -> [Move; 8] {
    let (f, r) = (slot.front, slot.right);
    [ccw(Up), ccw(f), cw(Up), cw(f), cw(Up), cw(r), ccw(Up), ccw(r)]
}

impl LayerSolver<'_> {
    pub(crate) fn solve_middle_edges(&mut self) -> Result<(), SolverError> {
        for (placed, slot) in SLOTS.iter().enumerate() {
            let edge = slot.middle_edge;
            let mut corrections = 0;

            while !edge_solved(self.cube(), edge) {
                self.correction(&mut corrections)?;

                let location = self.find_edge(edge)?;

                // In the wrong middle slot or flipped in its own; pop it into Up
                if !location.is_up() {
                    let holder = self.slot_holding(|candidate| candidate.middle_edge == location)?;
                    self.apply(&right_insert(&holder))?;
                    continue;
                }

                let found = (0..4)
                    .cartesian_product([right_insert(slot), left_insert(slot)])
                    .map(|(k, insert)| {
                        let mut moves = up_turns(k);
                        moves.extend(insert);
                        moves
                    })
                    .find(|moves| {
                        let cube = after(self.cube(), moves);
                        edge_solved(&cube, edge) && first_two_layers_solved(&cube, placed)
                    })
                    .ok_or_else(|| self.stall(StallReason::NoCorrection))?;

                self.apply(&found)?;
            }
        }

        Ok(())
    }
}
