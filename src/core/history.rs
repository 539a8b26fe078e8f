//! Linear undo/redo history.
//!
//! Two stacks track where the machine has been: `past` holds previously
//! occupied states (most recent last) and `future` holds states that were
//! undone (most recently undone last). Recording a fresh transition abandons
//! the redo branch; there is no history tree.

use std::mem;

/// Undo/redo stacks for a state machine.
///
/// The history never stores the current state itself; callers pass it in so
/// it can be swapped with the top of the relevant stack.
///
/// # Example
///
/// ```rust
/// use rewind_fsm::core::TransitionHistory;
///
/// let mut history = TransitionHistory::new();
/// let mut current = "idle".to_string();
///
/// history.record(std::mem::replace(&mut current, "running".to_string()));
/// assert!(history.undo(&mut current));
/// assert_eq!(current, "idle");
///
/// assert!(history.redo(&mut current));
/// assert_eq!(current, "running");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionHistory<S> {
    past: Vec<S>,
    future: Vec<S>,
}

impl<S> Default for TransitionHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TransitionHistory<S> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
        }
    }

    /// Record the state being left by a new transition.
    ///
    /// Discards every pending redo entry.
    pub fn record(&mut self, previous: S) {
        self.future.clear();
        self.past.push(previous);
    }

    /// Step back: `current` is pushed onto the redo stack and replaced by
    /// the most recent past state. Returns `false` (touching nothing) when
    /// there is nothing to undo.
    pub fn undo(&mut self, current: &mut S) -> bool {
        match self.past.pop() {
            Some(previous) => {
                self.future.push(mem::replace(current, previous));
                true
            }
            None => false,
        }
    }

    /// Exact inverse of [`undo`](Self::undo).
    pub fn redo(&mut self, current: &mut S) -> bool {
        match self.future.pop() {
            Some(next) => {
                self.past.push(mem::replace(current, next));
                true
            }
            None => false,
        }
    }

    /// Forget past states. The redo stack is left as is.
    pub fn clear_past(&mut self) {
        self.past.clear();
    }

    /// Previously occupied states, oldest first.
    pub fn past(&self) -> &[S] {
        &self.past
    }

    /// Undone states, the next one to redo last.
    pub fn future(&self) -> &[S] {
        &self.future
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Step {
        A,
        B,
        C,
    }

    fn history_through(steps: &[Step]) -> (TransitionHistory<Step>, Step) {
        let mut history = TransitionHistory::new();
        let mut current = steps[0];
        for &next in &steps[1..] {
            history.record(mem::replace(&mut current, next));
        }
        (history, current)
    }

    #[test]
    fn new_history_is_empty() {
        let history: TransitionHistory<Step> = TransitionHistory::new();

        assert!(history.past().is_empty());
        assert!(history.future().is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_pushes_previous_state() {
        let (history, current) = history_through(&[Step::A, Step::B, Step::C]);

        assert_eq!(history.past(), &[Step::A, Step::B]);
        assert_eq!(current, Step::C);
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut history = TransitionHistory::new();
        let mut current = Step::A;

        assert!(!history.undo(&mut current));
        assert_eq!(current, Step::A);
        assert!(history.future().is_empty());
    }

    #[test]
    fn undo_moves_current_to_redo_stack() {
        let (mut history, mut current) = history_through(&[Step::A, Step::B, Step::C]);

        assert!(history.undo(&mut current));

        assert_eq!(current, Step::B);
        assert_eq!(history.past(), &[Step::A]);
        assert_eq!(history.future(), &[Step::C]);
    }

    #[test]
    fn redo_is_inverse_of_undo() {
        let (mut history, mut current) = history_through(&[Step::A, Step::B, Step::C]);
        let before = history.clone();

        assert!(history.undo(&mut current));
        assert!(history.redo(&mut current));

        assert_eq!(current, Step::C);
        assert_eq!(history, before);
    }

    #[test]
    fn redo_on_empty_stack_is_noop() {
        let (mut history, mut current) = history_through(&[Step::A, Step::B]);

        assert!(!history.redo(&mut current));
        assert_eq!(current, Step::B);
        assert_eq!(history.past(), &[Step::A]);
    }

    #[test]
    fn record_after_undo_discards_redo_branch() {
        let (mut history, mut current) = history_through(&[Step::A, Step::B, Step::C]);
        history.undo(&mut current);
        history.undo(&mut current);
        assert_eq!(history.future().len(), 2);

        history.record(mem::replace(&mut current, Step::C));

        assert!(!history.can_redo());
        assert_eq!(history.past(), &[Step::A]);
    }

    #[test]
    fn clear_past_keeps_redo_stack() {
        let (mut history, mut current) = history_through(&[Step::A, Step::B, Step::C]);
        history.undo(&mut current);

        history.clear_past();

        assert!(!history.can_undo());
        assert_eq!(history.future(), &[Step::C]);
    }
}
