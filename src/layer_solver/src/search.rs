//! Small bounded searches the phases use to pick a corrective sequence. Both
//! only read the cube; the caller applies the result.

use itertools::Itertools;
use rubik_core::{
    Cube, Move, RotationKind,
    Side::{self, Back, Down, Front, Left, Right, Up},
};

const SEARCH_SIDES: [Side; 6] = [Up, Front, Right, Back, Left, Down];

/// `quarter_turns` clockwise turns of Up as at most one move.
pub fn up_turns(quarter_turns: usize) -> Vec<Move> {
    RotationKind::from_quarter_turns(quarter_turns)
        .map(|kind| Move::new(Up, kind))
        .into_iter()
        .collect()
}

pub fn after(cube: &Cube, moves: &[Move]) -> Cube {
    let mut cube = cube.clone();
    cube.rotate_all(moves);
    cube
}

/// Iterative deepening over all face turns, shortest sequences first. Two
/// consecutive moves never turn the same side.
pub fn iddfs(cube: &Cube, max_depth: usize, accept: impl Fn(&Cube) -> bool) -> Option<Vec<Move>> {
    let mut path = Vec::with_capacity(max_depth);

    (0..=max_depth).find_map(|depth| {
        dfs(cube, depth, None, &mut path, &accept).then(|| path.clone())
    })
}

fn dfs(
    cube: &Cube,
    depth: usize,
    last: Option<Side>,
    path: &mut Vec<Move>,
    accept: &impl Fn(&Cube) -> bool,
) -> bool {
    if depth == 0 {
        return accept(cube);
    }

    for side in SEARCH_SIDES {
        if last == Some(side) {
            continue;
        }

        for kind in RotationKind::ALL {
            let move_ = Move::new(side, kind);
            path.push(move_);

            if dfs(&after(cube, &[move_]), depth - 1, Some(side), path, accept) {
                return true;
            }

            path.pop();
        }
    }

    false
}

/// Tries every chain of up to `max_blocks` blocks followed by an Up
/// alignment, where a block is an Up alignment followed by one of
/// `algorithms`. Fewer blocks are tried first.
pub fn block_search(
    cube: &Cube,
    algorithms: &[&[Move]],
    max_blocks: usize,
    accept: impl Fn(&Cube) -> bool,
) -> Option<Vec<Move>> {
    let blocks = (0..4)
        .cartesian_product(algorithms)
        .map(|(k, algorithm)| {
            let mut block = up_turns(k);
            block.extend_from_slice(algorithm);
            block
        })
        .collect_vec();

    let chains = (1..=max_blocks).flat_map(|count| {
        std::iter::repeat_n(blocks.iter(), count)
            .multi_cartesian_product()
            .map(|chain| chain.into_iter().flatten().copied().collect_vec())
    });

    std::iter::once(Vec::new())
        .chain(chains)
        .flat_map(|base| {
            (0..4).map(move |k| {
                let mut sequence = base.clone();
                sequence.extend(up_turns(k));
                sequence
            })
        })
        .find(|sequence| accept(&after(cube, sequence)))
}

#[cfg(test)]
mod tests {
    use rubik_core::{Cube, Move, Side, parse_sequence};

    use super::{block_search, iddfs, up_turns};

    #[test]
    fn up_turns_wrap() {
        assert!(up_turns(0).is_empty());
        assert!(up_turns(4).is_empty());
        assert_eq!(up_turns(3), vec![Move::counter_clockwise(Side::Up)]);
        assert_eq!(up_turns(6), vec![Move::half_turn(Side::Up)]);
    }

    #[test]
    fn iddfs_finds_the_shortest_undo() {
        let mut cube = Cube::solved();
        cube.rotate_all(&parse_sequence("R U").unwrap());

        let found = iddfs(&cube, 3, Cube::is_solved).unwrap();
        assert_eq!(found, parse_sequence("U' R'").unwrap());

        assert_eq!(iddfs(&Cube::solved(), 3, Cube::is_solved), Some(vec![]));
    }

    #[test]
    fn iddfs_gives_up_past_its_depth() {
        let mut cube = Cube::solved();
        cube.rotate_all(&parse_sequence("R U F").unwrap());

        assert_eq!(iddfs(&cube, 2, Cube::is_solved), None);
    }

    #[test]
    fn block_search_undoes_an_algorithm() {
        let algorithm = parse_sequence("R U R' U'").unwrap();
        let inverse = rubik_core::moves::invert_sequence(&algorithm);

        let mut cube = Cube::solved();
        cube.rotate_all(&parse_sequence("U2").unwrap());
        cube.rotate_all(&algorithm);

        let found = block_search(&cube, &[&inverse], 1, Cube::is_solved).unwrap();

        let mut check = cube.clone();
        check.rotate_all(&found);
        assert!(check.is_solved());
    }
}
