//! Shortens a recorded move list without changing its net effect. Three
//! windowed rewrites run one after the other, each to its own fixpoint. A
//! pattern that only appears after a later rewrite is not fed back into an
//! earlier one, so the result is shorter but not necessarily minimal.

use log::trace;

use crate::moves::Move;

/// A rewrite over a fixed-size window of consecutive moves.
trait WindowRewriter {
    const WINDOW_SIZE: usize;

    /// The replacement for `window`, or `None` if the rewrite does not apply.
    /// `window` always holds exactly `WINDOW_SIZE` moves.
    fn try_match(window: &[Move]) -> Option<Vec<Move>>;
}

/// Four identical turns of one side do nothing.
struct RemoveQuadruplets;

impl WindowRewriter for RemoveQuadruplets {
    const WINDOW_SIZE: usize = 4;

    fn try_match(window: &[Move]) -> Option<Vec<Move>> {
        all_identical(window).then(Vec::new)
    }
}

/// Three identical turns are one turn the other way.
struct CollapseTriplets;

impl WindowRewriter for CollapseTriplets {
    const WINDOW_SIZE: usize = 3;

    fn try_match(window: &[Move]) -> Option<Vec<Move>> {
        all_identical(window).then(|| vec![window[0].inverse()])
    }
}

/// A turn followed by its opposite cancels; two identical turns are a half
/// turn.
struct CollapseDoublets;

impl WindowRewriter for CollapseDoublets {
    const WINDOW_SIZE: usize = 2;

    fn try_match(window: &[Move]) -> Option<Vec<Move>> {
        let [first, second] = window else {
            return None;
        };

        if first.side != second.side {
            return None;
        }

        if second.kind == first.kind.opposing() {
            Some(Vec::new())
        } else if second.kind == first.kind {
            Some(vec![Move::half_turn(first.side)])
        } else {
            None
        }
    }
}

fn all_identical(window: &[Move]) -> bool {
    window.iter().all(|move_| *move_ == window[0])
}

/// Rewrites the first matching window, then rescans from the start, until no
/// window matches. Every rewrite strictly shortens the list, so this
/// terminates.
fn rewrite_to_fixpoint<R: WindowRewriter>(mut moves: Vec<Move>) -> Vec<Move> {
    loop {
        let found = moves
            .windows(R::WINDOW_SIZE)
            .enumerate()
            .find_map(|(start, window)| {
                R::try_match(window).map(|replacement| (start, replacement))
            });

        let Some((start, replacement)) = found else {
            return moves;
        };

        trace!(
            "Rewriting {} moves at {start} into {}",
            R::WINDOW_SIZE,
            replacement.len()
        );
        debug_assert!(replacement.len() < R::WINDOW_SIZE);

        moves.splice(start..start + R::WINDOW_SIZE, replacement);
    }
}

#[must_use]
pub fn remove_quadruplets(moves: &[Move]) -> Vec<Move> {
    rewrite_to_fixpoint::<RemoveQuadruplets>(moves.to_vec())
}

#[must_use]
pub fn collapse_triplets(moves: &[Move]) -> Vec<Move> {
    rewrite_to_fixpoint::<CollapseTriplets>(moves.to_vec())
}

#[must_use]
pub fn collapse_doublets(moves: &[Move]) -> Vec<Move> {
    rewrite_to_fixpoint::<CollapseDoublets>(moves.to_vec())
}

/// Runs the three rewrites in order: quadruplets, triplets, doublets. The
/// input is not modified.
#[must_use]
pub fn normalize(moves: &[Move]) -> Vec<Move> {
    let moves = rewrite_to_fixpoint::<RemoveQuadruplets>(moves.to_vec());
    let moves = rewrite_to_fixpoint::<CollapseTriplets>(moves);
    rewrite_to_fixpoint::<CollapseDoublets>(moves)
}

#[cfg(test)]
mod tests {
    use super::{collapse_doublets, collapse_triplets, normalize, remove_quadruplets};
    use crate::{moves::Move, notation::parse_sequence};

    fn seq(text: &str) -> Vec<Move> {
        parse_sequence(text).unwrap()
    }

    #[test_log::test]
    fn quadruplets_vanish() {
        assert_eq!(remove_quadruplets(&seq("F F F F R")), seq("R"));
        assert_eq!(remove_quadruplets(&seq("U2 U2 U2 U2")), Vec::new());
        assert_eq!(remove_quadruplets(&seq("R F F F F R'")), seq("R R'"));
        // Removing the inner four exposes a new quadruplet
        assert_eq!(remove_quadruplets(&seq("D D D D D D D D")), Vec::new());
    }

    #[test_log::test]
    fn triplets_turn_the_other_way() {
        assert_eq!(collapse_triplets(&seq("F F F")), seq("F'"));
        assert_eq!(collapse_triplets(&seq("L' L' L' U")), seq("L U"));
        assert_eq!(collapse_triplets(&seq("U2 U2 U2")), seq("U2"));
    }

    #[test_log::test]
    fn doublets_cancel_or_merge() {
        assert_eq!(collapse_doublets(&seq("R R' U U D")), seq("U2 D"));
        assert_eq!(collapse_doublets(&seq("B2 B2")), Vec::new());
        assert_eq!(collapse_doublets(&seq("F2 F")), seq("F2 F"));
    }

    #[test_log::test]
    fn short_lists_pass_through() {
        assert_eq!(normalize(&[]), Vec::new());
        assert_eq!(normalize(&seq("F")), seq("F"));
        assert_eq!(remove_quadruplets(&seq("F F F")), seq("F F F"));
    }

    #[test_log::test]
    fn passes_run_once_in_order() {
        assert_eq!(normalize(&seq("F F F F F F")), seq("F2"));
        assert_eq!(normalize(&seq("F F F F R")), seq("R"));
        assert_eq!(normalize(&seq("F F F F F F F F F F F F F F")), seq("F2"));
        // Cancelling R R' leaves F F F, which the triplet pass never sees
        assert_eq!(normalize(&seq("F R R' F F")), seq("F2 F"));
        // Removing U U U U leaves L L L, which the triplet pass does see
        assert_eq!(normalize(&seq("L U U U U L L")), seq("L'"));
    }
}
