use rubik_core::{Move, Side};

use crate::{config::SolverConfig, error::StallReason};

/// Watches the moves of one phase and refuses the one that would exceed a
/// bound. The guard is reset whenever a new phase starts.
#[derive(Debug, Clone)]
pub struct StallGuard {
    max_same_face_run: usize,
    max_phase_moves: usize,
    run_side: Option<Side>,
    run_length: usize,
    phase_moves: usize,
}

impl StallGuard {
    #[must_use]
    pub fn new(config: &SolverConfig) -> StallGuard {
        StallGuard {
            max_same_face_run: config.max_same_face_run,
            max_phase_moves: config.max_phase_moves,
            run_side: None,
            run_length: 0,
            phase_moves: 0,
        }
    }

    pub fn reset(&mut self) {
        self.run_side = None;
        self.run_length = 0;
        self.phase_moves = 0;
    }

    /// Accounts for `move_` before it is applied.
    ///
    /// # Errors
    ///
    /// If applying the move would exceed either bound. The guard's state is
    /// unchanged in that case.
    pub fn admit(&mut self, move_: Move) -> Result<(), StallReason> {
        let run_length = if self.run_side == Some(move_.side) {
            self.run_length + 1
        } else {
            1
        };

        if run_length > self.max_same_face_run {
            return Err(StallReason::SameFaceRun);
        }

        if self.phase_moves + 1 > self.max_phase_moves {
            return Err(StallReason::MoveBudgetExhausted);
        }

        self.run_side = Some(move_.side);
        self.run_length = run_length;
        self.phase_moves += 1;

        Ok(())
    }

    #[must_use]
    pub fn phase_moves(&self) -> usize {
        self.phase_moves
    }
}

#[cfg(test)]
mod tests {
    use rubik_core::{Move, Side};

    use super::StallGuard;
    use crate::{config::SolverConfig, error::StallReason};

    #[test]
    fn long_same_face_run_stalls() {
        let mut guard = StallGuard::new(&SolverConfig::default());

        for _ in 0..4 {
            guard.admit(Move::clockwise(Side::Front)).unwrap();
        }
        assert_eq!(
            guard.admit(Move::counter_clockwise(Side::Front)),
            Err(StallReason::SameFaceRun)
        );

        guard.admit(Move::clockwise(Side::Up)).unwrap();
        guard.admit(Move::clockwise(Side::Front)).unwrap();
    }

    #[test]
    fn phase_budget_stalls_until_reset() {
        let config = SolverConfig {
            max_phase_moves: 3,
            ..SolverConfig::default()
        };
        let mut guard = StallGuard::new(&config);

        for side in [Side::Up, Side::Down, Side::Up] {
            guard.admit(Move::clockwise(side)).unwrap();
        }
        assert_eq!(
            guard.admit(Move::clockwise(Side::Left)),
            Err(StallReason::MoveBudgetExhausted)
        );
        assert_eq!(guard.phase_moves(), 3);

        guard.reset();
        guard.admit(Move::clockwise(Side::Left)).unwrap();
    }
}
