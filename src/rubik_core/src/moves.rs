use std::{fmt, str::FromStr};

use crate::notation::{self, NotationError};

/// One of the six fixed faces of the cube. The discriminant doubles as the
/// index of the face in the sticker arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Front = 0,
    Left = 1,
    Right = 2,
    Down = 3,
    Up = 4,
    Back = 5,
}

impl Side {
    pub const ALL: [Self; 6] = {
        use Side::*;
        let v = [Front, Left, Right, Down, Up, Back];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Side::Front => 'F',
            Side::Left => 'L',
            Side::Right => 'R',
            Side::Down => 'D',
            Side::Up => 'U',
            Side::Back => 'B',
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'F' => Some(Side::Front),
            'L' => Some(Side::Left),
            'R' => Some(Side::Right),
            'D' => Some(Side::Down),
            'U' => Some(Side::Up),
            'B' => Some(Side::Back),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RotationKind {
    Clockwise = 0,
    CounterClockwise = 1,
    HalfTurn = 2,
}

impl RotationKind {
    pub const ALL: [Self; 3] = [
        RotationKind::Clockwise,
        RotationKind::CounterClockwise,
        RotationKind::HalfTurn,
    ];

    /// The kind that undoes a single turn of this kind. A half turn is its own
    /// opposite.
    #[must_use]
    pub const fn opposing(self) -> Self {
        match self {
            RotationKind::Clockwise => RotationKind::CounterClockwise,
            RotationKind::CounterClockwise => RotationKind::Clockwise,
            RotationKind::HalfTurn => RotationKind::HalfTurn,
        }
    }

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            RotationKind::Clockwise => "",
            RotationKind::CounterClockwise => "'",
            RotationKind::HalfTurn => "2",
        }
    }

    /// The kind equivalent to `quarter_turns` clockwise quarter turns, or
    /// `None` when they cancel out.
    #[must_use]
    pub const fn from_quarter_turns(quarter_turns: usize) -> Option<Self> {
        match quarter_turns % 4 {
            1 => Some(RotationKind::Clockwise),
            2 => Some(RotationKind::HalfTurn),
            3 => Some(RotationKind::CounterClockwise),
            _ => None,
        }
    }
}

/// A single face turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub side: Side,
    pub kind: RotationKind,
}

impl Move {
    #[must_use]
    pub const fn new(side: Side, kind: RotationKind) -> Self {
        Move { side, kind }
    }

    #[must_use]
    pub const fn clockwise(side: Side) -> Self {
        Move::new(side, RotationKind::Clockwise)
    }

    #[must_use]
    pub const fn counter_clockwise(side: Side) -> Self {
        Move::new(side, RotationKind::CounterClockwise)
    }

    #[must_use]
    pub const fn half_turn(side: Side) -> Self {
        Move::new(side, RotationKind::HalfTurn)
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        Move::new(self.side, self.kind.opposing())
    }

    /// All 18 moves, grouped by side.
    pub fn all() -> impl Iterator<Item = Move> {
        Side::ALL.into_iter().flat_map(|side| {
            RotationKind::ALL
                .into_iter()
                .map(move |kind| Move::new(side, kind))
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side.letter(), self.kind.suffix())
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        notation::parse_move(s)
    }
}

/// Inverts a whole sequence: reversed order, every move inverted.
#[must_use]
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|move_| move_.inverse()).collect()
}
