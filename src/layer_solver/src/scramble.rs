use rubik_core::{Cube, Move, RotationKind, Side};

/// `length` moves drawn uniformly from all 18 face turns. The caller owns the
/// generator, so a seeded `rng` always yields the same scramble.
pub fn scramble(rng: &mut fastrand::Rng, length: usize) -> Vec<Move> {
    (0..length)
        .map(|_| {
            let side = Side::ALL[rng.usize(..Side::ALL.len())];
            let kind = RotationKind::ALL[rng.usize(..RotationKind::ALL.len())];
            Move::new(side, kind)
        })
        .collect()
}

/// A solved cube with `length` random moves applied, along with those moves.
pub fn scrambled_cube(rng: &mut fastrand::Rng, length: usize) -> (Cube, Vec<Move>) {
    let moves = scramble(rng, length);
    let mut cube = Cube::solved();
    cube.rotate_all(&moves);

    (cube, moves)
}

#[cfg(test)]
mod tests {
    use super::{scramble, scrambled_cube};

    #[test]
    fn seeded_scrambles_repeat() {
        let first = scramble(&mut fastrand::Rng::with_seed(99), 25);
        let second = scramble(&mut fastrand::Rng::with_seed(99), 25);

        assert_eq!(first.len(), 25);
        assert_eq!(first, second);
    }

    #[test]
    fn scrambled_cube_matches_its_moves() {
        let (cube, moves) = scrambled_cube(&mut fastrand::Rng::with_seed(5), 20);

        let mut replay = rubik_core::Cube::solved();
        replay.rotate_all(&moves);
        assert_eq!(cube, replay);
        assert_eq!(cube.color_counts(), [9; 6]);
    }
}
