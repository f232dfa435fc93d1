//! The rotation engine. A quarter turn of a side is one permutation of the 54
//! sticker positions: two 4-cycles on the turned face itself and three
//! 4-cycles through the strips of the bordering faces. The permutations are
//! derived once from the static adjacency tables below and shared by every
//! cube.

use std::sync::LazyLock;

use crate::{
    cube::{Cube, Facelet},
    moves::{Move, RotationKind, Side},
    permutation::Permutation,
};

/// Which border of the turned face a neighbour strip runs along, as seen on
/// the unfolded net.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Border {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Border {
    pub const ALL: [Self; 4] = [Border::Top, Border::Right, Border::Bottom, Border::Left];
}

/// Where a destination strip takes its stickers from during a clockwise
/// quarter turn. `reversed` strips are read back to front.
#[derive(Debug, Copy, Clone)]
struct Transfer {
    from: Border,
    reversed: bool,
}

const fn f(side: Side, row: u8, col: u8) -> Facelet {
    Facelet::new(side, row, col)
}

const fn t(from: Border, reversed: bool) -> Transfer {
    Transfer { from, reversed }
}

use Border::{Bottom, Left as L, Right as R, Top};
use Side::{Back, Down, Front, Left, Right, Up};

/// The three stickers of each bordering face that touch a side, indexed by
/// `[side][border]`.
const NEIGHBOUR_STRIPS: [[[Facelet; 3]; 4]; 6] = [
    // Front
    [
        [f(Up, 2, 0), f(Up, 2, 1), f(Up, 2, 2)],
        [f(Right, 0, 0), f(Right, 1, 0), f(Right, 2, 0)],
        [f(Down, 0, 0), f(Down, 0, 1), f(Down, 0, 2)],
        [f(Left, 2, 2), f(Left, 1, 2), f(Left, 0, 2)],
    ],
    // Left
    [
        [f(Up, 0, 0), f(Up, 1, 0), f(Up, 2, 0)],
        [f(Front, 0, 0), f(Front, 1, 0), f(Front, 2, 0)],
        [f(Down, 0, 0), f(Down, 1, 0), f(Down, 2, 0)],
        [f(Back, 0, 2), f(Back, 1, 2), f(Back, 2, 2)],
    ],
    // Right
    [
        [f(Up, 0, 2), f(Up, 1, 2), f(Up, 2, 2)],
        [f(Back, 0, 0), f(Back, 1, 0), f(Back, 2, 0)],
        [f(Down, 0, 2), f(Down, 1, 2), f(Down, 2, 2)],
        [f(Front, 0, 2), f(Front, 1, 2), f(Front, 2, 2)],
    ],
    // Down
    [
        [f(Front, 2, 0), f(Front, 2, 1), f(Front, 2, 2)],
        [f(Right, 2, 0), f(Right, 2, 1), f(Right, 2, 2)],
        [f(Back, 2, 0), f(Back, 2, 1), f(Back, 2, 2)],
        [f(Left, 2, 0), f(Left, 2, 1), f(Left, 2, 2)],
    ],
    // Up
    [
        [f(Back, 0, 0), f(Back, 0, 1), f(Back, 0, 2)],
        [f(Right, 0, 0), f(Right, 0, 1), f(Right, 0, 2)],
        [f(Front, 0, 0), f(Front, 0, 1), f(Front, 0, 2)],
        [f(Left, 0, 0), f(Left, 0, 1), f(Left, 0, 2)],
    ],
    // Back
    [
        [f(Up, 0, 0), f(Up, 0, 1), f(Up, 0, 2)],
        [f(Left, 0, 0), f(Left, 1, 0), f(Left, 2, 0)],
        [f(Down, 2, 0), f(Down, 2, 1), f(Down, 2, 2)],
        [f(Right, 0, 2), f(Right, 1, 2), f(Right, 2, 2)],
    ],
];

/// For a clockwise turn, the source of each destination strip, indexed by
/// `[side][destination border]`. The faces around a side are not uniformly
/// oriented relative to it, hence one table per side.
const CLOCKWISE_TRANSFERS: [[Transfer; 4]; 6] = [
    // Front
    [t(L, false), t(Top, false), t(R, true), t(Bottom, true)],
    // Left
    [t(L, true), t(Top, false), t(R, false), t(Bottom, true)],
    // Right
    [t(L, false), t(Top, true), t(R, true), t(Bottom, false)],
    // Down
    [t(L, false), t(Top, false), t(R, false), t(Bottom, false)],
    // Up
    [t(L, false), t(Top, false), t(R, false), t(Bottom, false)],
    // Back
    [t(L, false), t(Top, true), t(R, false), t(Bottom, true)],
];

/// Clockwise goes-to cycles of the turned face's own grid as `(row, col)`.
/// The center never moves.
const FACE_CYCLES: [[(u8, u8); 4]; 2] = [
    [(2, 0), (0, 0), (0, 2), (2, 2)],
    [(1, 0), (0, 1), (1, 2), (2, 1)],
];

#[derive(Debug)]
struct Turn {
    clockwise: Permutation,
    counter_clockwise: Permutation,
}

#[derive(Debug)]
pub struct Topology {
    turns: [Turn; 6],
}

static TOPOLOGY: LazyLock<Topology> = LazyLock::new(Topology::derive);

impl Topology {
    fn derive() -> Topology {
        Topology {
            turns: Side::ALL.map(|side| {
                let clockwise = clockwise_turn(side);
                let counter_clockwise = clockwise.inverse();

                Turn {
                    clockwise,
                    counter_clockwise,
                }
            }),
        }
    }

    #[must_use]
    pub fn get() -> &'static Topology {
        &TOPOLOGY
    }

    /// The strip of the face bordering `side` along `border`.
    #[must_use]
    pub fn neighbour_strip(side: Side, border: Border) -> [Facelet; 3] {
        NEIGHBOUR_STRIPS[side.index()][border as usize]
    }

    #[must_use]
    pub fn clockwise(&self, side: Side) -> &Permutation {
        &self.turns[side.index()].clockwise
    }

    #[must_use]
    pub fn counter_clockwise(&self, side: Side) -> &Permutation {
        &self.turns[side.index()].counter_clockwise
    }
}

fn clockwise_turn(side: Side) -> Permutation {
    let mut cycles: Vec<Vec<usize>> = FACE_CYCLES
        .iter()
        .map(|cycle| {
            cycle
                .iter()
                .map(|&(row, col)| Facelet::new(side, row, col).index())
                .collect()
        })
        .collect();

    let strips = &NEIGHBOUR_STRIPS[side.index()];
    let transfers = &CLOCKWISE_TRANSFERS[side.index()];

    // Position `i` of a destination strip receives position `source_index(i)`
    // of its source strip. Walking that backwards from the top strip traces
    // the three 4-cycles through the four strips.
    for start in 0..3 {
        let mut cycle = Vec::with_capacity(4);
        let mut border = Border::Top;
        let mut i = start;

        loop {
            cycle.push(strips[border as usize][i].index());

            let transfer = transfers[border as usize];
            i = if transfer.reversed { 2 - i } else { i };
            border = transfer.from;

            if border == Border::Top && i == start {
                break;
            }
        }

        // `cycle` lists each position followed by the one feeding it, so it
        // is a comes-from cycle.
        cycle.reverse();
        cycles.push(cycle);
    }

    Permutation::from_cycles(&cycles)
}

impl Cube {
    /// Applies one move. A half turn is the clockwise permutation applied
    /// twice; a counter-clockwise turn is its inverse.
    pub fn rotate(&mut self, move_: Move) {
        let topology = Topology::get();

        match move_.kind {
            RotationKind::Clockwise => topology.clockwise(move_.side).permute(&mut self.stickers),
            RotationKind::CounterClockwise => topology
                .counter_clockwise(move_.side)
                .permute(&mut self.stickers),
            RotationKind::HalfTurn => {
                let clockwise = topology.clockwise(move_.side);
                clockwise.permute(&mut self.stickers);
                clockwise.permute(&mut self.stickers);
            }
        }
    }
}
