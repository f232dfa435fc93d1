use std::fmt;

use rubik_core::{Cube, Move, normalizer::normalize};

use crate::pieces;

/// The five solving stages, in the order they must run. Down is the first
/// layer and Up the last.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Cross = 0,
    FirstLayerCorners = 1,
    MiddleEdges = 2,
    LastLayerCross = 3,
    LastLayer = 4,
}

impl Phase {
    pub const ALL: [Self; 5] = {
        use Phase::*;
        let v = [
            Cross,
            FirstLayerCorners,
            MiddleEdges,
            LastLayerCross,
            LastLayer,
        ];

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
    pub const fn previous(self) -> Option<Phase> {
        match self {
            Phase::Cross => None,
            Phase::FirstLayerCorners => Some(Phase::Cross),
            Phase::MiddleEdges => Some(Phase::FirstLayerCorners),
            Phase::LastLayerCross => Some(Phase::MiddleEdges),
            Phase::LastLayer => Some(Phase::LastLayerCross),
        }
    }

    /// Whether the goal of this phase, and of every phase before it, holds.
    #[must_use]
    pub fn is_complete(self, cube: &Cube) -> bool {
        match self {
            Phase::Cross => pieces::cross_solved(cube, 4),
            Phase::FirstLayerCorners => pieces::first_layer_solved(cube, 4),
            Phase::MiddleEdges => pieces::first_two_layers_solved(cube, 4),
            Phase::LastLayerCross => pieces::last_layer_cross_solved(cube),
            Phase::LastLayer => cube.is_solved(),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Cross => "cross",
            Phase::FirstLayerCorners => "first layer corners",
            Phase::MiddleEdges => "middle edges",
            Phase::LastLayerCross => "last layer cross",
            Phase::LastLayer => "last layer",
        })
    }
}

/// Moves applied per phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseTracker {
    counts: [usize; 5],
}

impl PhaseTracker {
    #[must_use]
    pub fn count(&self, phase: Phase) -> usize {
        self.counts[phase.index()]
    }

    #[must_use]
    pub fn counts(&self) -> [usize; 5] {
        self.counts
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    fn increment(&mut self, phase: Phase) {
        self.counts[phase.index()] += 1;
    }
}

/// Append-only log of every move the solver applied, attributed to the phase
/// that applied it.
#[derive(Debug, Clone, Default)]
pub struct MoveRecorder {
    moves: Vec<Move>,
    tracker: PhaseTracker,
}

impl MoveRecorder {
    pub fn record(&mut self, phase: Phase, move_: Move) {
        self.moves.push(move_);
        self.tracker.increment(phase);
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The recorded moves, optionally passed through the normalizer. The log
    /// itself is never rewritten.
    #[must_use]
    pub fn rotations(&self, normalized: bool) -> Vec<Move> {
        if normalized {
            normalize(&self.moves)
        } else {
            self.moves.clone()
        }
    }

    #[must_use]
    pub fn tracker(&self) -> &PhaseTracker {
        &self.tracker
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rubik_core::{Move, Side};

    use super::{MoveRecorder, Phase};

    #[test]
    fn counters_follow_the_log() {
        let mut recorder = MoveRecorder::default();

        recorder.record(Phase::Cross, Move::clockwise(Side::Up));
        recorder.record(Phase::Cross, Move::clockwise(Side::Up));
        recorder.record(Phase::MiddleEdges, Move::half_turn(Side::Right));

        assert_eq!(recorder.len(), 3);
        assert_eq!(recorder.tracker().counts(), [2, 0, 1, 0, 0]);
        assert_eq!(recorder.tracker().total(), recorder.len());
    }

    #[test]
    fn normalized_view_leaves_the_log_alone() {
        let mut recorder = MoveRecorder::default();

        for _ in 0..3 {
            recorder.record(Phase::LastLayer, Move::clockwise(Side::Front));
        }

        assert_eq!(
            recorder.rotations(true),
            vec![Move::counter_clockwise(Side::Front)]
        );
        assert_eq!(recorder.rotations(false).len(), 3);
        assert_eq!(recorder.moves().len(), 3);
    }
}
