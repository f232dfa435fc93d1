use rubik_core::{Move, Side::Up};

use super::{ccw, cw};
use crate::{
    error::{SolverError, StallReason},
    pieces::{SLOTS, Slot, corner_solved, locate_corner},
    search::{after, up_turns},
    solver::LayerSolver,
};

/// `r U r' U'` with `r` the slot's right side. Repeated, it brings the corner
/// above the slot down into it.
fn trigger(slot: &Slot) -> [Move; 4] {
    [cw(slot.right), cw(Up), ccw(slot.right), ccw(Up)]
}

impl LayerSolver<'_> {
    pub(crate) fn solve_first_layer_corners(&mut self) -> Result<(), SolverError> {
        for slot in SLOTS {
            let corner = slot.down_corner;
            let mut corrections = 0;

            while !corner_solved(self.cube(), corner) {
                self.correction(&mut corrections)?;

                let location = self.find_corner(corner)?;

                // Stuck in some Down slot, possibly its own but twisted
                if location.is_down() {
                    let holder = self.slot_holding(|candidate| candidate.down_corner == location)?;
                    self.apply(&trigger(&holder))?;
                    continue;
                }

                if location != slot.up_corner {
                    let turns = (0..4)
                        .find(|&k| {
                            locate_corner(&after(self.cube(), &up_turns(k)), corner)
                                == Some(slot.up_corner)
                        })
                        .ok_or_else(|| self.stall(StallReason::NoCorrection))?;

                    self.apply(&up_turns(turns))?;
                }

                while !corner_solved(self.cube(), corner) {
                    self.correction(&mut corrections)?;
                    self.apply(&trigger(&slot))?;
                }
            }
        }

        Ok(())
    }
}
