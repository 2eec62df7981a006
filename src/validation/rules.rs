//! Determinism check for transition relations using Validation.

use crate::automaton::Delta;
use crate::core::{State, Symbol};
use crate::validation::conflict::DeterminismConflict;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check that `delta` is a partial function over `(state, symbol)`.
///
/// Compares every unordered pair of entries once, so this is quadratic in the
/// number of transitions. Returns `Validation::Success(())` for a
/// deterministic relation, or `Validation::Failure` holding ALL conflicts in
/// relation order. Duplicate entries that agree on the target are not
/// conflicts.
pub fn check_determinism<S: State, A: Symbol>(
    delta: &Delta<S, A>,
) -> Validation<(), NonEmptyVec<DeterminismConflict<S, A>>> {
    let transitions = delta.transitions();
    let mut checks: Vec<Validation<(), NonEmptyVec<DeterminismConflict<S, A>>>> = Vec::new();

    for (i, first) in transitions.iter().enumerate() {
        for (j, second) in transitions.iter().enumerate().skip(i + 1) {
            if first.source == second.source
                && first.symbol == second.symbol
                && first.target != second.target
            {
                checks.push(Validation::fail(DeterminismConflict {
                    from: first.source.clone(),
                    symbol: first.symbol.clone(),
                    first_target: first.target.clone(),
                    second_target: second.target.clone(),
                    first_index: i,
                    second_index: j,
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Collect every determinism conflict in `delta`; empty when deterministic.
pub fn find_conflicts<S: State, A: Symbol>(
    delta: &Delta<S, A>,
) -> Vec<DeterminismConflict<S, A>> {
    match check_determinism(delta) {
        Validation::Success(()) => Vec::new(),
        Validation::Failure(conflicts) => conflicts.iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TaggedState, TaggedSymbol};

    const A: TaggedState = TaggedState::simple(0);
    const B: TaggedState = TaggedState::simple(1);
    const C: TaggedState = TaggedState::accepting(2);
    const X: TaggedSymbol = TaggedSymbol::new(0);
    const Y: TaggedSymbol = TaggedSymbol::new(1);

    #[test]
    fn deterministic_relation_passes() {
        let delta = Delta::new().with(A, X, B).with(A, Y, C).with(B, X, C);

        assert!(check_determinism(&delta).is_success());
        assert!(find_conflicts(&delta).is_empty());
    }

    #[test]
    fn empty_relation_passes() {
        let delta: Delta<TaggedState, TaggedSymbol> = Delta::new();

        assert!(check_determinism(&delta).is_success());
    }

    #[test]
    fn agreeing_duplicates_are_not_conflicts() {
        let delta = Delta::new().with(A, X, B).with(A, X, B);

        assert!(check_determinism(&delta).is_success());
    }

    #[test]
    fn conflict_is_reported_with_positions() {
        let delta = Delta::new().with(A, X, B).with(B, Y, C).with(A, X, C);

        let conflicts = find_conflicts(&delta);
        assert_eq!(conflicts.len(), 1);

        let conflict = &conflicts[0];
        assert_eq!(conflict.from, A);
        assert_eq!(conflict.symbol, X);
        assert_eq!(conflict.first_target, B);
        assert_eq!(conflict.second_target, C);
        assert_eq!((conflict.first_index, conflict.second_index), (0, 2));
    }

    #[test]
    fn check_accumulates_all_conflicts() {
        let delta = Delta::new()
            .with(A, X, A)
            .with(A, X, B)
            .with(A, X, C)
            .with(B, Y, A)
            .with(B, Y, C);

        match check_determinism(&delta) {
            Validation::Failure(conflicts) => {
                // (0,1), (0,2), (1,2) on A/X and (3,4) on B/Y
                assert_eq!(conflicts.len(), 4);
                assert!(conflicts.iter().any(|c| c.from == B && c.symbol == Y));
            }
            Validation::Success(_) => panic!("Expected conflicts, got success"),
        }
    }

    #[test]
    fn conflict_display_mentions_both_targets() {
        let delta = Delta::new().with(A, X, B).with(A, X, C);
        let message = find_conflicts(&delta)[0].to_string();

        assert!(message.contains("id: 1"));
        assert!(message.contains("id: 2"));
        assert!(message.contains("#0"));
        assert!(message.contains("#1"));
    }
}
