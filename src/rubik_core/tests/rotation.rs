use rubik_core::{
    Color::{self, Blue, Green, Orange, Red, White, Yellow},
    Cube, FaceGrid, Move, RotationKind, Side, parse_sequence,
};

fn random_moves(rng: &mut fastrand::Rng, count: usize) -> Vec<Move> {
    (0..count)
        .map(|_| {
            Move::new(
                Side::ALL[rng.usize(0..6)],
                RotationKind::ALL[rng.usize(0..3)],
            )
        })
        .collect()
}

fn scrambled(seed: u64) -> Cube {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut cube = Cube::solved();
    cube.rotate_all(&random_moves(&mut rng, 30));
    cube
}

#[test_log::test]
fn four_quarter_turns_are_the_identity() {
    for seed in 0..4 {
        let start = scrambled(seed);

        for side in Side::ALL {
            let mut cube = start.clone();
            for _ in 0..4 {
                cube.rotate(Move::clockwise(side));
            }
            assert_eq!(cube, start, "{side:?}");
        }
    }
}

#[test_log::test]
fn quarter_turn_and_its_inverse_cancel() {
    let start = scrambled(7);

    for side in Side::ALL {
        let mut cube = start.clone();
        cube.rotate(Move::clockwise(side));
        cube.rotate(Move::counter_clockwise(side));
        assert_eq!(cube, start);

        cube.rotate(Move::counter_clockwise(side));
        cube.rotate(Move::clockwise(side));
        assert_eq!(cube, start);
    }
}

#[test_log::test]
fn half_turn_is_two_quarter_turns() {
    let start = scrambled(11);

    for side in Side::ALL {
        let mut twice = start.clone();
        twice.rotate(Move::clockwise(side));
        twice.rotate(Move::clockwise(side));

        let mut half = start.clone();
        half.rotate(Move::half_turn(side));

        assert_eq!(twice, half);
    }
}

#[test_log::test]
fn colors_are_conserved() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let mut cube = Cube::solved();

    for _ in 0..50 {
        cube.rotate_all(&random_moves(&mut rng, 10));
        assert_eq!(cube.color_counts(), [9; 6]);

        for side in Side::ALL {
            assert_eq!(cube.center(side), Color::of_solved(side));
        }
    }
}

#[test_log::test]
fn inverted_sequence_restores_the_cube() {
    let mut rng = fastrand::Rng::with_seed(3);
    let moves = random_moves(&mut rng, 40);

    let mut cube = Cube::solved();
    cube.rotate_all(&moves);
    assert!(!cube.is_solved());

    cube.rotate_all(&rubik_core::moves::invert_sequence(&moves));
    assert!(cube.is_solved());
}

#[test_log::test]
fn front_four_times_leaves_solved_cube() {
    let mut cube = Cube::solved();
    cube.apply_command_sequence("F F F F").unwrap();
    assert!(cube.is_solved());
}

#[test_log::test]
fn front_then_front_prime_leaves_solved_cube() {
    let mut cube = Cube::solved();
    cube.rotate(Move::clockwise(Side::Front));
    cube.rotate(Move::counter_clockwise(Side::Front));
    assert_eq!(cube, Cube::solved());
}

#[test_log::test]
fn three_fronts_equal_front_prime() {
    let mut three = Cube::solved();
    three.apply_command_sequence("F F F").unwrap();

    let mut prime = Cube::solved();
    prime.apply_command_sequence("F'").unwrap();

    assert_eq!(three, prime);
    assert!(!three.is_solved());
}

#[test_log::test]
fn sexy_sledge_grid() {
    let mut cube = Cube::solved();
    let applied = cube.apply_command_sequence("F R U R' U' F'").unwrap();
    assert_eq!(applied, parse_sequence("F R U R' U' F'").unwrap());

    let expected: [(Side, FaceGrid); 6] = [
        (
            Side::Front,
            [[Green, Yellow, Red], [Red, Red, Red], [Red, Red, Red]],
        ),
        (
            Side::Left,
            [[Orange, Blue, Red], [Blue, Blue, Blue], [Blue, Blue, Blue]],
        ),
        (
            Side::Right,
            [
                [Yellow, Yellow, Yellow],
                [Green, Green, Green],
                [Green, Green, Green],
            ],
        ),
        (Side::Down, [[White; 3]; 3]),
        (
            Side::Up,
            [
                [Yellow, Yellow, Blue],
                [Yellow, Yellow, Red],
                [Yellow, Orange, Blue],
            ],
        ),
        (
            Side::Back,
            [
                [Orange, Green, Green],
                [Orange, Orange, Orange],
                [Orange, Orange, Orange],
            ],
        ),
    ];

    assert_eq!(cube.faces(), expected);

    let mut again = Cube::solved();
    again.apply_command_sequence("F R U R' U' F'").unwrap();
    assert_eq!(again, cube);
}

#[test_log::test]
fn unknown_token_is_rejected_atomically() {
    let mut cube = Cube::solved();

    assert!(cube.apply_command_sequence("F R X").is_err());
    assert!(cube.is_solved());

    cube.apply_command_sequence("R").unwrap();
    let before = cube.clone();
    assert!(cube.apply_command_sequence("U D2 B''").is_err());
    assert_eq!(cube, before);
}
