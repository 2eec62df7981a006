//! Deterministic automaton that consumes symbols against a shared relation.

use crate::automaton::transition::{Delta, TransitionError};
use crate::builder::BuildError;
use crate::core::{State, Symbol};
use crate::validation::{find_conflicts, ConflictPolicy, DeterminismConflict};
use std::borrow::Borrow;
use std::sync::Arc;

/// Automaton with a fixed relation and a movable current-state cursor.
///
/// The relation is held behind an `Arc` and never mutated, so one relation
/// can back any number of automata. The cursor is the only mutable part and
/// only moves when a step succeeds.
///
/// # Example
///
/// ```rust
/// use minidfa::{Automaton, Delta, TaggedState, TaggedSymbol};
///
/// let even = TaggedState::accepting(0);
/// let odd = TaggedState::simple(1);
/// let one = TaggedSymbol::new(1);
///
/// let delta = Delta::new().with(even, one, odd).with(odd, one, even);
/// let mut parity = Automaton::new(even, delta);
///
/// assert!(parity.consume([one, one, one]));
/// assert_eq!(parity.current_state(), &odd);
/// assert!(!parity.is_accepting());
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: State, A: Symbol> {
    start: S,
    current: S,
    delta: Arc<Delta<S, A>>,
    conflicts: Vec<DeterminismConflict<S, A>>,
}

impl<S: State, A: Symbol> Automaton<S, A> {
    /// Create an automaton positioned at `start`.
    ///
    /// The relation is checked for determinism. Every conflict is logged as a
    /// warning and kept in [`conflicts`](Self::conflicts); construction still
    /// succeeds and the first matching transition fires at runtime. Use
    /// [`try_new`](Self::try_new) to refuse such relations instead.
    pub fn new(start: S, delta: impl Into<Arc<Delta<S, A>>>) -> Self {
        let delta = delta.into();
        let conflicts = find_conflicts(&*delta);
        Self::assemble(start, delta, conflicts)
    }

    /// Create an automaton, failing if the relation is not deterministic.
    pub fn try_new(start: S, delta: impl Into<Arc<Delta<S, A>>>) -> Result<Self, BuildError> {
        Self::with_policy(start, delta, ConflictPolicy::Reject)
    }

    /// Create an automaton, reacting to determinism conflicts per `policy`.
    pub fn with_policy(
        start: S,
        delta: impl Into<Arc<Delta<S, A>>>,
        policy: ConflictPolicy,
    ) -> Result<Self, BuildError> {
        let delta = delta.into();
        let conflicts = find_conflicts(&*delta);

        if policy == ConflictPolicy::Reject && !conflicts.is_empty() {
            tracing::debug!(
                "Rejecting transition relation with {} conflicts",
                conflicts.len()
            );
            return Err(BuildError::NonDeterministic {
                count: conflicts.len(),
                conflicts: conflicts.iter().map(ToString::to_string).collect(),
            });
        }

        Ok(Self::assemble(start, delta, conflicts))
    }

    fn assemble(
        start: S,
        delta: Arc<Delta<S, A>>,
        conflicts: Vec<DeterminismConflict<S, A>>,
    ) -> Self {
        for conflict in &conflicts {
            tracing::warn!("Non-deterministic transition relation: {}", conflict);
        }

        tracing::debug!(
            "Automaton created at {:?} with {} transitions ({} conflicts)",
            start,
            delta.len(),
            conflicts.len()
        );

        Self {
            current: start.clone(),
            start,
            delta,
            conflicts,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the state the automaton started in (pure)
    pub fn start_state(&self) -> &S {
        &self.start
    }

    /// Check if the current state is final (pure)
    pub fn is_accepting(&self) -> bool {
        self.current.is_final()
    }

    /// The shared transition relation.
    pub fn delta(&self) -> &Arc<Delta<S, A>> {
        &self.delta
    }

    /// Determinism conflicts found when the automaton was created.
    pub fn conflicts(&self) -> &[DeterminismConflict<S, A>] {
        &self.conflicts
    }

    pub fn is_deterministic(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Move the cursor back to the start state.
    pub fn reset(&mut self) {
        self.current = self.start.clone();
    }

    /// Consume one symbol.
    ///
    /// Returns `true` and moves to the target of the first matching transition,
    /// or returns `false` and stays put when `(current, symbol)` is undefined.
    pub fn step(&mut self, symbol: &A) -> bool {
        match self.delta.lookup(&self.current, symbol) {
            Some(transition) => {
                tracing::trace!(
                    "{:?} --{:?}--> {:?}",
                    self.current,
                    symbol,
                    transition.target
                );
                self.current = transition.target.clone();
                true
            }
            None => {
                tracing::debug!("No transition from {:?} on {:?}", self.current, symbol);
                false
            }
        }
    }

    /// Consume one symbol, treating an undefined transition as an error.
    ///
    /// On error the current state is unchanged.
    pub fn try_step(&mut self, symbol: &A) -> Result<&S, TransitionError> {
        if self.step(symbol) {
            Ok(&self.current)
        } else {
            Err(TransitionError::NoTransition {
                state: format!("{:?}", self.current),
                symbol: format!("{:?}", symbol),
            })
        }
    }

    /// Consume a whole sequence of symbols.
    ///
    /// Every symbol is attempted, even after a failed step: a rejected symbol
    /// leaves the cursor where it was and the next symbol is tried from there.
    /// Returns `true` iff every individual step succeeded.
    pub fn consume<I>(&mut self, symbols: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let mut all_taken = true;
        for symbol in symbols {
            if !self.step(symbol.borrow()) {
                all_taken = false;
            }
        }
        all_taken
    }

    /// Consume a sequence and report whether it was accepted: every step
    /// succeeded and the automaton ends in a final state.
    pub fn accepts<I>(&mut self, symbols: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        self.consume(symbols) && self.is_accepting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TaggedState, TaggedSymbol};

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum WorkflowState {
        Initial,
        Processing,
        Complete,
    }

    impl State for WorkflowState {
        fn is_final(&self) -> bool {
            matches!(self, Self::Complete)
        }
    }

    fn workflow() -> Delta<WorkflowState, char> {
        Delta::new()
            .with(WorkflowState::Initial, 's', WorkflowState::Processing)
            .with(WorkflowState::Processing, 'f', WorkflowState::Complete)
            .with(WorkflowState::Complete, 'r', WorkflowState::Initial)
    }

    #[test]
    fn starts_in_start_state() {
        let machine = Automaton::new(WorkflowState::Initial, workflow());

        assert_eq!(machine.current_state(), &WorkflowState::Initial);
        assert_eq!(machine.start_state(), &WorkflowState::Initial);
        assert!(!machine.is_accepting());
        assert!(machine.is_deterministic());
    }

    #[test]
    fn step_follows_defined_transition() {
        let mut machine = Automaton::new(WorkflowState::Initial, workflow());

        assert!(machine.step(&'s'));
        assert_eq!(machine.current_state(), &WorkflowState::Processing);
    }

    #[test]
    fn step_rejects_undefined_transition_without_moving() {
        let mut machine = Automaton::new(WorkflowState::Initial, workflow());

        assert!(!machine.step(&'f'));
        assert_eq!(machine.current_state(), &WorkflowState::Initial);
    }

    #[test]
    fn final_state_does_not_halt_consumption() {
        let mut machine = Automaton::new(WorkflowState::Initial, workflow());

        assert!(machine.consume(['s', 'f']));
        assert!(machine.is_accepting());

        assert!(machine.step(&'r'));
        assert_eq!(machine.current_state(), &WorkflowState::Initial);
        assert!(!machine.is_accepting());
    }

    #[test]
    fn consume_continues_after_failure() {
        let mut machine = Automaton::new(WorkflowState::Initial, workflow());

        // 'x' is rejected from Initial, then 's' and 'f' still apply
        assert!(!machine.consume("sxf".chars()));
        assert_eq!(machine.current_state(), &WorkflowState::Complete);
    }

    #[test]
    fn consume_accepts_borrowed_symbols() {
        let mut machine = Automaton::new(WorkflowState::Initial, workflow());
        let input = vec!['s', 'f'];

        assert!(machine.consume(&input));
        assert!(machine.is_accepting());
    }

    #[test]
    fn accepts_requires_final_state() {
        let mut machine = Automaton::new(WorkflowState::Initial, workflow());
        assert!(!machine.accepts(['s']));

        machine.reset();
        assert!(machine.accepts(['s', 'f']));

        machine.reset();
        assert!(!machine.accepts(['s', 'x', 'f']));
        assert!(machine.is_accepting());
    }

    #[test]
    fn try_step_reports_missing_transition() {
        let mut machine = Automaton::new(WorkflowState::Initial, workflow());

        assert_eq!(machine.try_step(&'s'), Ok(&WorkflowState::Processing));

        let err = machine.try_step(&'s').unwrap_err();
        assert_eq!(
            err,
            TransitionError::NoTransition {
                state: "Processing".to_string(),
                symbol: "'s'".to_string(),
            }
        );
        assert_eq!(machine.current_state(), &WorkflowState::Processing);
    }

    #[test]
    fn reset_returns_to_start() {
        let mut machine = Automaton::new(WorkflowState::Initial, workflow());
        machine.consume(['s', 'f']);

        machine.reset();
        assert_eq!(machine.current_state(), &WorkflowState::Initial);
    }

    #[test]
    fn empty_relation_rejects_everything() {
        let start = TaggedState::simple(0);
        let mut machine = Automaton::new(start, Delta::<TaggedState, TaggedSymbol>::new());

        for id in 0..5 {
            assert!(!machine.step(&TaggedSymbol::new(id)));
            assert_eq!(machine.current_state(), &start);
        }
    }

    #[test]
    fn conflicting_relation_is_recorded_and_first_match_fires() {
        let delta = Delta::new()
            .with(WorkflowState::Initial, 's', WorkflowState::Processing)
            .with(WorkflowState::Initial, 's', WorkflowState::Complete);
        let mut machine = Automaton::new(WorkflowState::Initial, delta);

        assert!(!machine.is_deterministic());
        assert_eq!(machine.conflicts().len(), 1);

        assert!(machine.step(&'s'));
        assert_eq!(machine.current_state(), &WorkflowState::Processing);
    }

    #[test]
    fn try_new_rejects_conflicting_relation() {
        let delta = Delta::new()
            .with(WorkflowState::Initial, 's', WorkflowState::Processing)
            .with(WorkflowState::Initial, 's', WorkflowState::Complete);

        let result = Automaton::try_new(WorkflowState::Initial, delta);

        match result {
            Err(BuildError::NonDeterministic { count, conflicts }) => {
                assert_eq!(count, 1);
                assert_eq!(conflicts.len(), 1);
            }
            other => panic!("Expected NonDeterministic, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn try_new_accepts_deterministic_relation() {
        let machine = Automaton::try_new(WorkflowState::Initial, workflow());

        assert!(machine.is_ok());
    }

    #[test]
    fn warn_policy_builds_despite_conflicts() {
        let delta = Delta::new()
            .with(WorkflowState::Initial, 's', WorkflowState::Processing)
            .with(WorkflowState::Initial, 's', WorkflowState::Complete);

        let machine =
            Automaton::with_policy(WorkflowState::Initial, delta, ConflictPolicy::Warn).unwrap();
        assert_eq!(machine.conflicts().len(), 1);
    }

    #[test]
    fn relation_is_shared_between_automata() {
        let delta = Arc::new(workflow());
        let mut first = Automaton::new(WorkflowState::Initial, Arc::clone(&delta));
        let second = Automaton::new(WorkflowState::Initial, Arc::clone(&delta));

        first.step(&'s');

        assert!(Arc::ptr_eq(first.delta(), second.delta()));
        assert_eq!(first.current_state(), &WorkflowState::Processing);
        assert_eq!(second.current_state(), &WorkflowState::Initial);
    }
}
