//! Mini-game trait for game cores.
//!
//! Games implement `MiniGame` to define their rules:
//! - Which moves are accepted
//! - How an accepted move produces the next state
//! - When the game is finished

use crate::games::GameKind;

/// Events that may count as a host progress notification.
pub trait ProgressEvent {
    /// True if the host should be notified of progress for this event.
    fn is_progress(&self) -> bool;
}

/// Result of applying a move: the next state plus the events it produced.
#[derive(Clone, Debug)]
pub struct Step<G: MiniGame> {
    /// State after the move.
    pub state: G,

    /// Events in the order they happened.
    pub events: Vec<G::Event>,
}

impl<G: MiniGame> Step<G> {
    /// Wrap a state with its events.
    #[must_use]
    pub fn new(state: G, events: Vec<G::Event>) -> Self {
        Self { state, events }
    }

    /// A step that changed nothing.
    #[must_use]
    pub fn unchanged(state: G) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }

    /// Number of progress notifications the host should fire.
    #[must_use]
    pub fn progress_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_progress()).count()
    }

    /// True if the move was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Mini-game rules.
///
/// States are values: `play` borrows the current state and returns a new
/// one, so a rejected move can never leave a half-updated state behind.
///
/// ## Implementation Notes
///
/// - `play`: Return `Err` for every invalid move; never panic on input
/// - Every accepted move must emit exactly one progress event
/// - `is_finished`: Once true, `play` must reject every move
pub trait MiniGame: Clone + Sized {
    /// Input accepted by the game.
    type Move;

    /// Events produced by accepted moves.
    type Event: ProgressEvent;

    /// Why a move was rejected.
    type Rejection: std::error::Error;

    /// Which catalog entry this game implements.
    fn kind(&self) -> GameKind;

    /// Apply a move, or explain why it is invalid.
    fn play(&self, mv: &Self::Move) -> Result<Step<Self>, Self::Rejection>;

    /// Check if the game has reached its terminal state.
    fn is_finished(&self) -> bool;

    // === Convenience Methods ===

    /// Apply a move, treating rejection as a no-op.
    ///
    /// Matches how the UI treats invalid input: nothing happens, no
    /// progress is reported.
    fn apply(&self, mv: &Self::Move) -> Step<Self> {
        match self.play(mv) {
            Ok(step) => step,
            Err(reason) => {
                tracing::debug!(game = %self.kind(), %reason, "move rejected");
                Step::unchanged(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        value: u32,
        limit: u32,
    }

    #[derive(Debug)]
    struct Full;

    impl std::fmt::Display for Full {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("counter is full")
        }
    }

    impl std::error::Error for Full {}

    #[derive(Clone, Debug)]
    enum Tick {
        Progress,
        Reached,
    }

    impl ProgressEvent for Tick {
        fn is_progress(&self) -> bool {
            matches!(self, Tick::Progress)
        }
    }

    impl MiniGame for Counter {
        type Move = ();
        type Event = Tick;
        type Rejection = Full;

        fn kind(&self) -> GameKind {
            GameKind::Swipe
        }

        fn play(&self, _mv: &()) -> Result<Step<Self>, Full> {
            if self.is_finished() {
                return Err(Full);
            }
            let next = Counter {
                value: self.value + 1,
                limit: self.limit,
            };
            let mut events = vec![Tick::Progress];
            if next.is_finished() {
                events.push(Tick::Reached);
            }
            Ok(Step::new(next, events))
        }

        fn is_finished(&self) -> bool {
            self.value >= self.limit
        }
    }

    #[test]
    fn test_apply_accepts() {
        let game = Counter { value: 0, limit: 1 };
        let step = game.apply(&());

        assert!(step.is_accepted());
        assert_eq!(step.state.value, 1);
        assert_eq!(step.progress_count(), 1);
        assert_eq!(step.events.len(), 2);
    }

    #[test]
    fn test_apply_rejection_is_noop() {
        let game = Counter { value: 1, limit: 1 };
        let step = game.apply(&());

        assert!(!step.is_accepted());
        assert_eq!(step.state, game);
        assert_eq!(step.progress_count(), 0);
    }
}
