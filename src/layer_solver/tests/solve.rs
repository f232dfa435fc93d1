use layer_solver::{
    LayerSolver, Phase, SolverConfig, SolverError, StallReason,
    pieces::{self, CornerSlot},
    scramble::scrambled_cube,
};
use log::info;
use rubik_core::{Cube, Side, parse_sequence};

fn every_face_is_monochromatic(cube: &Cube) -> bool {
    Side::ALL
        .into_iter()
        .all(|side| cube.is_face_monochromatic(side))
}

#[test_log::test]
fn seeded_twenty_move_scramble_solves() {
    let (mut cube, scramble) = scrambled_cube(&mut fastrand::Rng::with_seed(2024), 20);
    assert!(!cube.is_solved());

    let mut solver = LayerSolver::new(&mut cube);
    for phase in Phase::ALL {
        solver.solve_phase(phase).unwrap();
        assert!(phase.is_complete(solver.cube()), "{phase}");
    }

    assert!(every_face_is_monochromatic(solver.cube()));

    let counts = solver.tracker().counts();
    assert_eq!(counts.iter().sum::<usize>(), solver.total_rotations());
    for phase in Phase::ALL {
        assert_eq!(solver.phase_rotations(phase), counts[phase.index()]);
    }

    // Both views of the log replay the scramble back to solved
    for normalized in [false, true] {
        let mut replay = Cube::solved();
        replay.rotate_all(&scramble);
        replay.rotate_all(&solver.rotations(normalized));
        assert!(replay.is_solved());
    }

    assert!(solver.rotations(true).len() <= solver.rotations(false).len());
    info!(
        "Solved in {} moves, {} after normalizing",
        solver.total_rotations(),
        solver.rotations(true).len()
    );
}

#[test_log::test]
fn many_seeded_scrambles_solve() {
    let mut rng = fastrand::Rng::with_seed(7);

    for _ in 0..20 {
        let (mut cube, _) = scrambled_cube(&mut rng, 30);
        let mut solver = LayerSolver::new(&mut cube);

        solver.solve().unwrap();
        assert!(solver.cube().is_solved());
        assert_eq!(solver.tracker().total(), solver.total_rotations());
    }
}

#[test_log::test]
fn phases_stop_at_their_own_goal() {
    let (mut cube, _) = scrambled_cube(&mut fastrand::Rng::with_seed(31), 25);
    let mut solver = LayerSolver::new(&mut cube);

    solver.solve_phase(Phase::Cross).unwrap();
    assert!(pieces::cross_solved(solver.cube(), 4));
    assert_eq!(solver.phase_rotations(Phase::FirstLayerCorners), 0);

    solver.solve_phase(Phase::FirstLayerCorners).unwrap();
    assert!(pieces::first_layer_solved(solver.cube(), 4));
    assert_eq!(solver.phase_rotations(Phase::MiddleEdges), 0);

    // Running a finished phase again is a no-op
    let total = solver.total_rotations();
    solver.solve_phase(Phase::Cross).unwrap();
    assert_eq!(solver.total_rotations(), total);
}

#[test_log::test]
fn last_layer_only_scramble() {
    let mut cube = Cube::solved();
    cube.rotate_all(&parse_sequence("R U R' U R U2 R'").unwrap());
    assert!(Phase::MiddleEdges.is_complete(&cube));

    let mut solver = LayerSolver::new(&mut cube);
    solver.solve().unwrap();

    assert_eq!(solver.phase_rotations(Phase::Cross), 0);
    assert_eq!(solver.phase_rotations(Phase::FirstLayerCorners), 0);
    assert_eq!(solver.phase_rotations(Phase::MiddleEdges), 0);
    assert!(solver.cube().is_solved());
    assert!(pieces::up_corners_placed(solver.cube()));
    assert!(pieces::corner_solved(solver.cube(), CornerSlot::UFR));
}

#[test_log::test]
fn tight_same_face_bound_stalls() {
    let mut cube = Cube::solved();
    cube.rotate_all(&parse_sequence("U2 R2").unwrap());

    let config = SolverConfig {
        max_same_face_run: 0,
        ..SolverConfig::default()
    };
    let mut solver = LayerSolver::with_config(&mut cube, config);

    assert!(matches!(
        solver.solve(),
        Err(SolverError::Stalled { .. })
    ));
    assert_eq!(solver.total_rotations(), 0);
}

#[test_log::test]
fn zero_corrections_stall_on_the_first_misplaced_piece() {
    let mut cube = Cube::solved();
    cube.rotate_all(&parse_sequence("U2 R2").unwrap());
    let before = cube.clone();

    let config = SolverConfig {
        max_corrections: 0,
        ..SolverConfig::default()
    };
    let mut solver = LayerSolver::with_config(&mut cube, config);

    assert_eq!(
        solver.solve(),
        Err(SolverError::Stalled {
            phase: Phase::Cross,
            reason: StallReason::CorrectionLimit,
        })
    );
    assert_eq!(solver.total_rotations(), 0);
    assert_eq!(*solver.cube(), before);
}
