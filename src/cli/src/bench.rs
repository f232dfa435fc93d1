use std::time::{Duration, Instant};

use layer_solver::{LayerSolver, Phase, SolverConfig, SolverError, scramble::scrambled_cube};
use log::debug;

/// Totals over a batch of solves. Averages divide by the number of solves.
#[derive(Debug, Default, Clone)]
pub struct BatchStats {
    pub solves: usize,
    pub elapsed: Duration,
    pub moves: usize,
    pub normalized_moves: usize,
    pub phase_moves: [usize; 5],
}

impl BatchStats {
    pub fn add(&mut self, solver: &LayerSolver<'_>, elapsed: Duration) {
        self.solves += 1;
        self.elapsed += elapsed;
        self.moves += solver.total_rotations();
        self.normalized_moves += solver.rotations(true).len();

        for phase in Phase::ALL {
            self.phase_moves[phase.index()] += solver.phase_rotations(phase);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn average(&self, total: usize) -> f64 {
        if self.solves == 0 {
            0.0
        } else {
            total as f64 / self.solves as f64
        }
    }

    pub fn average_time(&self) -> Duration {
        match u32::try_from(self.solves) {
            Ok(solves) if solves > 0 => self.elapsed / solves,
            _ => Duration::ZERO,
        }
    }

    pub fn average_moves(&self) -> f64 {
        self.average(self.moves)
    }

    pub fn average_normalized_moves(&self) -> f64 {
        self.average(self.normalized_moves)
    }

    pub fn average_phase_moves(&self, phase: Phase) -> f64 {
        self.average(self.phase_moves[phase.index()])
    }
}

/// Solves `count` scrambles of `length` moves drawn from `rng`.
pub fn run(
    rng: &mut fastrand::Rng,
    count: usize,
    length: usize,
    config: &SolverConfig,
) -> Result<BatchStats, SolverError> {
    let mut stats = BatchStats::default();

    for i in 0..count {
        let (mut cube, _) = scrambled_cube(rng, length);

        let start = Instant::now();
        let mut solver = LayerSolver::with_config(&mut cube, config.clone());
        solver.solve()?;
        let elapsed = start.elapsed();

        debug!("Solve {i} took {} moves", solver.total_rotations());
        stats.add(&solver, elapsed);
    }

    Ok(stats)
}
