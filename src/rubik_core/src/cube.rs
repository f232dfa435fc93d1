use crate::{
    moves::{Move, Side},
    notation::{NotationError, parse_sequence},
};

pub const FACELETS_PER_FACE: usize = 9;
pub const STICKER_COUNT: usize = FACELETS_PER_FACE * 6;

/// Sticker color. Solved, side `i` is entirely the color with index `i`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red = 0,
    Blue = 1,
    Green = 2,
    White = 3,
    Yellow = 4,
    Orange = 5,
}

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [Red, Blue, Green, White, Yellow, Orange];

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
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
        }
    }

    /// The color a solved cube shows on `side`.
    #[must_use]
    pub const fn of_solved(side: Side) -> Self {
        Color::ALL[side.index()]
    }
}

/// A sticker position: a side plus a `(row, col)` cell of its 3×3 grid, as
/// seen on the unfolded net.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Facelet {
    pub side: Side,
    pub row: u8,
    pub col: u8,
}

impl Facelet {
    #[must_use]
    pub const fn new(side: Side, row: u8, col: u8) -> Facelet {
        assert!(row < 3 && col < 3);
        Facelet { side, row, col }
    }

    #[must_use]
    pub const fn center(side: Side) -> Facelet {
        Facelet::new(side, 1, 1)
    }

    /// Position of this facelet in the sticker arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.side.index() * FACELETS_PER_FACE + self.row as usize * 3 + self.col as usize
    }
}

/// A face as data, indexed `[row][col]`.
pub type FaceGrid = [[Color; 3]; 3];

/// The full sticker state. All 54 stickers live in one arena; the adjacency
/// between faces is a static property of the rotation engine and never
/// stored here.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Cube {
    pub(crate) stickers: [Color; STICKER_COUNT],
}

impl Default for Cube {
    fn default() -> Self {
        Cube::solved()
    }
}

impl Cube {
    #[must_use]
    pub fn solved() -> Cube {
        let mut stickers = [Color::Red; STICKER_COUNT];

        for side in Side::ALL {
            let start = side.index() * FACELETS_PER_FACE;
            stickers[start..start + FACELETS_PER_FACE].fill(Color::of_solved(side));
        }

        Cube { stickers }
    }

    #[must_use]
    pub fn sticker(&self, facelet: Facelet) -> Color {
        self.stickers[facelet.index()]
    }

    /// Centers never move, so this is also the color `side` must end up with.
    #[must_use]
    pub fn center(&self, side: Side) -> Color {
        self.sticker(Facelet::center(side))
    }

    #[must_use]
    pub fn face(&self, side: Side) -> FaceGrid {
        let mut grid = [[Color::Red; 3]; 3];

        for (row, cells) in (0..).zip(grid.iter_mut()) {
            for (col, cell) in (0..).zip(cells.iter_mut()) {
                *cell = self.sticker(Facelet::new(side, row, col));
            }
        }

        grid
    }

    /// Every face with its grid, in `Side::ALL` order. This is the data an
    /// external renderer draws from.
    #[must_use]
    pub fn faces(&self) -> [(Side, FaceGrid); 6] {
        Side::ALL.map(|side| (side, self.face(side)))
    }

    #[must_use]
    pub fn is_face_monochromatic(&self, side: Side) -> bool {
        let start = side.index() * FACELETS_PER_FACE;
        let face = &self.stickers[start..start + FACELETS_PER_FACE];

        face.iter().all(|&color| color == face[0])
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        Side::ALL
            .into_iter()
            .all(|side| self.is_face_monochromatic(side))
    }

    /// How many stickers show each color, indexed by `Color::index`.
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];

        for color in self.stickers {
            counts[color.index()] += 1;
        }

        counts
    }

    pub fn rotate_all<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for &move_ in moves {
            self.rotate(move_);
        }
    }

    /// Validates the whole command sequence, then applies it. On a malformed
    /// sequence the cube is left untouched. The applied moves are returned so
    /// the caller can record them.
    ///
    /// # Errors
    ///
    /// If the text does not match the move notation grammar.
    pub fn apply_command_sequence(&mut self, text: &str) -> Result<Vec<Move>, NotationError> {
        let moves = parse_sequence(text)?;

        self.rotate_all(&moves);

        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Cube, Facelet, STICKER_COUNT};
    use crate::moves::Side;

    #[test]
    fn solved_cube_is_monochromatic() {
        let cube = Cube::solved();

        assert!(cube.is_solved());
        assert_eq!(cube.color_counts(), [9; 6]);

        for (side, grid) in cube.faces() {
            assert!(grid.iter().flatten().all(|&color| color == Color::of_solved(side)));
        }
    }

    #[test]
    fn facelet_indices_cover_the_arena() {
        let mut seen = [false; STICKER_COUNT];

        for side in Side::ALL {
            for row in 0..3 {
                for col in 0..3 {
                    let index = Facelet::new(side, row, col).index();
                    assert!(!seen[index]);
                    seen[index] = true;
                }
            }
        }

        assert!(seen.iter().all(|&seen| seen));
    }

    #[test]
    fn rejected_sequence_leaves_the_cube_alone() {
        let mut cube = Cube::solved();

        assert!(cube.apply_command_sequence("F R X").is_err());
        assert!(cube.apply_command_sequence("F  R").is_err());
        assert_eq!(cube, Cube::solved());
    }
}
