//! Edge and corner slots, and the predicates the phases use to find pieces and
//! check their placement. A piece "belongs" in a slot when its colors are the
//! center colors of the slot's sides.

use rubik_core::{
    Color, Cube, Facelet,
    Side::{self, Back, Down, Front, Left, Right, Up},
};

const fn f(side: Side, row: u8, col: u8) -> Facelet {
    Facelet::new(side, row, col)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EdgeSlot {
    UF,
    UL,
    UR,
    UB,
    DF,
    DL,
    DR,
    DB,
    FL,
    FR,
    BR,
    BL,
}

impl EdgeSlot {
    pub const ALL: [Self; 12] = {
        use EdgeSlot::*;
        [UF, UL, UR, UB, DF, DL, DR, DB, FL, FR, BR, BL]
    };

    /// The Up edges in the order the last layer is checked.
    pub const UP: [Self; 4] = [EdgeSlot::UF, EdgeSlot::UR, EdgeSlot::UB, EdgeSlot::UL];

    /// The Down edges in the order the cross is built.
    pub const CROSS: [Self; 4] = [EdgeSlot::DF, EdgeSlot::DR, EdgeSlot::DB, EdgeSlot::DL];

    /// Stickers of the slot. For Up and Down edges the first is on that side;
    /// for middle edges it is on Front or Back.
    #[must_use]
    pub const fn facelets(self) -> [Facelet; 2] {
        match self {
            EdgeSlot::UF => [f(Up, 2, 1), f(Front, 0, 1)],
            EdgeSlot::UL => [f(Up, 1, 0), f(Left, 0, 1)],
            EdgeSlot::UR => [f(Up, 1, 2), f(Right, 0, 1)],
            EdgeSlot::UB => [f(Up, 0, 1), f(Back, 0, 1)],
            EdgeSlot::DF => [f(Down, 0, 1), f(Front, 2, 1)],
            EdgeSlot::DL => [f(Down, 1, 0), f(Left, 2, 1)],
            EdgeSlot::DR => [f(Down, 1, 2), f(Right, 2, 1)],
            EdgeSlot::DB => [f(Down, 2, 1), f(Back, 2, 1)],
            EdgeSlot::FL => [f(Front, 1, 0), f(Left, 1, 2)],
            EdgeSlot::FR => [f(Front, 1, 2), f(Right, 1, 0)],
            EdgeSlot::BR => [f(Back, 1, 0), f(Right, 1, 2)],
            EdgeSlot::BL => [f(Back, 1, 2), f(Left, 1, 0)],
        }
    }

    #[must_use]
    pub const fn is_up(self) -> bool {
        matches!(
            self,
            EdgeSlot::UF | EdgeSlot::UL | EdgeSlot::UR | EdgeSlot::UB
        )
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CornerSlot {
    UFL,
    UFR,
    UBR,
    UBL,
    DFL,
    DFR,
    DBR,
    DBL,
}

impl CornerSlot {
    pub const ALL: [Self; 8] = {
        use CornerSlot::*;
        [UFL, UFR, UBR, UBL, DFL, DFR, DBR, DBL]
    };

    pub const UP: [Self; 4] = [
        CornerSlot::UFR,
        CornerSlot::UBR,
        CornerSlot::UBL,
        CornerSlot::UFL,
    ];

    /// Stickers of the slot. The first is on Up or Down.
    #[must_use]
    pub const fn facelets(self) -> [Facelet; 3] {
        match self {
            CornerSlot::UFL => [f(Up, 2, 0), f(Front, 0, 0), f(Left, 0, 2)],
            CornerSlot::UFR => [f(Up, 2, 2), f(Front, 0, 2), f(Right, 0, 0)],
            CornerSlot::UBR => [f(Up, 0, 2), f(Back, 0, 0), f(Right, 0, 2)],
            CornerSlot::UBL => [f(Up, 0, 0), f(Back, 0, 2), f(Left, 0, 0)],
            CornerSlot::DFL => [f(Down, 0, 0), f(Front, 2, 0), f(Left, 2, 2)],
            CornerSlot::DFR => [f(Down, 0, 2), f(Front, 2, 2), f(Right, 2, 0)],
            CornerSlot::DBR => [f(Down, 2, 2), f(Back, 2, 0), f(Right, 2, 2)],
            CornerSlot::DBL => [f(Down, 2, 0), f(Back, 2, 2), f(Left, 2, 0)],
        }
    }

    #[must_use]
    pub const fn is_down(self) -> bool {
        matches!(
            self,
            CornerSlot::DFL | CornerSlot::DFR | CornerSlot::DBR | CornerSlot::DBL
        )
    }
}

/// One of the four first-layer slots, seen from the side that is its front.
/// `right` is the side to the right of `front` when looking at it with Up on
/// top.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Slot {
    pub front: Side,
    pub right: Side,
    pub down_edge: EdgeSlot,
    pub down_corner: CornerSlot,
    pub up_corner: CornerSlot,
    pub middle_edge: EdgeSlot,
}

/// The first-layer slots in the order they are filled.
pub const SLOTS: [Slot; 4] = [
    Slot {
        front: Front,
        right: Right,
        down_edge: EdgeSlot::DF,
        down_corner: CornerSlot::DFR,
        up_corner: CornerSlot::UFR,
        middle_edge: EdgeSlot::FR,
    },
    Slot {
        front: Right,
        right: Back,
        down_edge: EdgeSlot::DR,
        down_corner: CornerSlot::DBR,
        up_corner: CornerSlot::UBR,
        middle_edge: EdgeSlot::BR,
    },
    Slot {
        front: Back,
        right: Left,
        down_edge: EdgeSlot::DB,
        down_corner: CornerSlot::DBL,
        up_corner: CornerSlot::UBL,
        middle_edge: EdgeSlot::BL,
    },
    Slot {
        front: Left,
        right: Front,
        down_edge: EdgeSlot::DL,
        down_corner: CornerSlot::DFL,
        up_corner: CornerSlot::UFL,
        middle_edge: EdgeSlot::FL,
    },
];

/// Whether a three-sticker piece shows exactly the colors
/// `{corners.0, corners.1, center}`, in any arrangement. Only placement is
/// checked; a twisted piece still passes.
#[must_use]
pub fn triplet_at_correct_position(
    stickers: [Color; 3],
    corners: (Color, Color),
    center: Color,
) -> bool {
    let expected = [corners.0, corners.1, center];

    stickers
        .iter()
        .filter(|sticker| expected.contains(sticker))
        .count()
        == 3
}

fn home_colors<const N: usize>(cube: &Cube, facelets: [Facelet; N]) -> [Color; N] {
    facelets.map(|facelet| cube.center(facelet.side))
}

fn colors_at<const N: usize>(cube: &Cube, facelets: [Facelet; N]) -> [Color; N] {
    facelets.map(|facelet| cube.sticker(facelet))
}

/// Every sticker of the slot matches the center of its side.
fn stickers_home<const N: usize>(cube: &Cube, facelets: [Facelet; N]) -> bool {
    colors_at(cube, facelets) == home_colors(cube, facelets)
}

#[must_use]
pub fn edge_solved(cube: &Cube, slot: EdgeSlot) -> bool {
    stickers_home(cube, slot.facelets())
}

#[must_use]
pub fn corner_solved(cube: &Cube, slot: CornerSlot) -> bool {
    stickers_home(cube, slot.facelets())
}

/// The slot currently holding the edge that belongs in `piece`.
#[must_use]
pub fn locate_edge(cube: &Cube, piece: EdgeSlot) -> Option<EdgeSlot> {
    let [a, b] = home_colors(cube, piece.facelets());

    EdgeSlot::ALL.into_iter().find(|&slot| {
        let [x, y] = colors_at(cube, slot.facelets());
        (x, y) == (a, b) || (x, y) == (b, a)
    })
}

/// The slot currently holding the corner that belongs in `piece`.
#[must_use]
pub fn locate_corner(cube: &Cube, piece: CornerSlot) -> Option<CornerSlot> {
    let [center, left, right] = home_colors(cube, piece.facelets());

    CornerSlot::ALL.into_iter().find(|&slot| {
        triplet_at_correct_position(colors_at(cube, slot.facelets()), (left, right), center)
    })
}

/// The first `count` cross edges are solved.
#[must_use]
pub fn cross_solved(cube: &Cube, count: usize) -> bool {
    EdgeSlot::CROSS[..count]
        .iter()
        .all(|&edge| edge_solved(cube, edge))
}

/// The cross and the Down corners of the first `count` slots are solved.
#[must_use]
pub fn first_layer_solved(cube: &Cube, count: usize) -> bool {
    cross_solved(cube, 4)
        && SLOTS[..count]
            .iter()
            .all(|slot| corner_solved(cube, slot.down_corner))
}

/// The first layer and the middle edges of the first `count` slots are solved.
#[must_use]
pub fn first_two_layers_solved(cube: &Cube, count: usize) -> bool {
    first_layer_solved(cube, 4)
        && SLOTS[..count]
            .iter()
            .all(|slot| edge_solved(cube, slot.middle_edge))
}

/// How many Up edges show the Up color on top.
#[must_use]
pub fn oriented_up_edges(cube: &Cube) -> usize {
    let up = cube.center(Up);

    EdgeSlot::UP
        .iter()
        .filter(|edge| cube.sticker(edge.facelets()[0]) == up)
        .count()
}

#[must_use]
pub fn up_edges_solved(cube: &Cube) -> bool {
    EdgeSlot::UP.iter().all(|&edge| edge_solved(cube, edge))
}

/// The first two layers and the Up cross are solved.
#[must_use]
pub fn last_layer_cross_solved(cube: &Cube) -> bool {
    first_two_layers_solved(cube, 4) && up_edges_solved(cube)
}

/// Every Up corner sits in its own slot, possibly twisted.
#[must_use]
pub fn up_corners_placed(cube: &Cube) -> bool {
    CornerSlot::UP
        .iter()
        .all(|&corner| locate_corner(cube, corner) == Some(corner))
}
