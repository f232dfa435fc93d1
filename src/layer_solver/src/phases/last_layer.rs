use itertools::Itertools;
use rubik_core::{
    Move,
    Side::{Back, Down, Front, Right, Up},
};

use super::{ccw, cw, half};
use crate::{
    error::{SolverError, StallReason},
    pieces::{
        CornerSlot, first_two_layers_solved, last_layer_cross_solved, oriented_up_edges,
        up_corners_placed, up_edges_solved,
    },
    search::{after, block_search, up_turns},
    solver::LayerSolver,
};

/// `F R U R' U' F'`
const ORIENT_LINE: [Move; 6] = [cw(Front), cw(Right), cw(Up), ccw(Right), ccw(Up), ccw(Front)];
/// `F U R U' R' F'`
const ORIENT_ANGLE: [Move; 6] = [cw(Front), cw(Up), cw(Right), ccw(Up), ccw(Right), ccw(Front)];

/// `R U' R U R U R U' R' U' R2`
const EDGE_CYCLE: [Move; 11] = [
    cw(Right),
    ccw(Up),
    cw(Right),
    cw(Up),
    cw(Right),
    cw(Up),
    cw(Right),
    ccw(Up),
    ccw(Right),
    ccw(Up),
    half(Right),
];
/// `R2 U R U R' U' R' U' R' U R'`
const EDGE_CYCLE_INVERSE: [Move; 11] = [
    half(Right),
    cw(Up),
    cw(Right),
    cw(Up),
    ccw(Right),
    ccw(Up),
    ccw(Right),
    ccw(Up),
    ccw(Right),
    cw(Up),
    ccw(Right),
];

/// `R' F R' B2 R F' R' B2 R2`
const CORNER_CYCLE: [Move; 9] = [
    ccw(Right),
    cw(Front),
    ccw(Right),
    half(Back),
    cw(Right),
    ccw(Front),
    ccw(Right),
    half(Back),
    half(Right),
];
/// `R2 B2 R F R' B2 R F' R`
const CORNER_CYCLE_INVERSE: [Move; 9] = [
    half(Right),
    half(Back),
    cw(Right),
    cw(Front),
    ccw(Right),
    half(Back),
    cw(Right),
    ccw(Front),
    cw(Right),
];

/// `R' D' R D`. Twists the Up-front-right corner while scrambling part of
/// Down; the Down layer comes back once every Up corner is oriented.
const TWIST: [Move; 4] = [ccw(Right), ccw(Down), cw(Right), cw(Down)];

/// Most cycle algorithms chained in one permutation step.
const MAX_CYCLES: usize = 2;

impl LayerSolver<'_> {
    /// Orients the Up edges, then cycles them into place.
    pub(crate) fn solve_last_layer_cross(&mut self) -> Result<(), SolverError> {
        let mut corrections = 0;

        while oriented_up_edges(self.cube()) < 4 {
            self.correction(&mut corrections)?;

            let oriented = oriented_up_edges(self.cube());
            let candidates = (0..4)
                .cartesian_product([ORIENT_LINE, ORIENT_ANGLE])
                .filter_map(|(k, algorithm)| {
                    let mut moves = up_turns(k);
                    moves.extend(algorithm);

                    let cube = after(self.cube(), &moves);
                    first_two_layers_solved(&cube, 4)
                        .then(|| (oriented_up_edges(&cube), moves))
                })
                .collect_vec();

            // Prefer finishing outright, otherwise take any improvement
            let (_, moves) = candidates
                .iter()
                .find(|(count, _)| *count == 4)
                .or_else(|| candidates.iter().find(|(count, _)| *count > oriented))
                .ok_or_else(|| self.stall(StallReason::NoCorrection))?;

            let moves = moves.clone();
            self.apply(&moves)?;
        }

        let moves = block_search(
            self.cube(),
            &[&EDGE_CYCLE[..], &EDGE_CYCLE_INVERSE[..]],
            MAX_CYCLES,
            last_layer_cross_solved,
        )
        .ok_or_else(|| self.stall(StallReason::NoCorrection))?;

        self.apply(&moves)
    }

    /// Cycles the Up corners into place, then twists them one at a time at
    /// the front-right position.
    pub(crate) fn solve_last_layer(&mut self) -> Result<(), SolverError> {
        let moves = block_search(
            self.cube(),
            &[&CORNER_CYCLE[..], &CORNER_CYCLE_INVERSE[..]],
            MAX_CYCLES,
            |cube| {
                first_two_layers_solved(cube, 4) && up_edges_solved(cube) && up_corners_placed(cube)
            },
        )
        .ok_or_else(|| self.stall(StallReason::NoCorrection))?;

        self.apply(&moves)?;

        let up = self.cube().center(Up);
        let [top, ..] = CornerSlot::UFR.facelets();

        // Up turns are deferred until a corner actually needs twisting, so a
        // run of already oriented corners costs a single alignment move.
        let mut pending = 0;

        for _ in 0..4 {
            let mut corrections = 0;

            while after(self.cube(), &up_turns(pending)).sticker(top) != up {
                self.correction(&mut corrections)?;

                self.apply(&up_turns(pending))?;
                pending = 0;

                self.apply(&TWIST)?;
            }

            pending += 1;
        }

        self.apply(&up_turns(pending))
    }
}
