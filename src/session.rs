//! Session driver.
//!
//! A `Session` owns the one state value of a running game and applies the
//! host's moves to it in order. Each progress event is counted and, if the
//! host registered a hook, forwarded to it.
//!
//! ```
//! use minigame_engine::bracket::{initialize, Selection};
//! use minigame_engine::core::Entrant;
//! use minigame_engine::session::Session;
//!
//! let a = Entrant::new("a", "A", "a.png");
//! let b = Entrant::new("b", "B", "b.png");
//! let mut session = Session::new(initialize(vec![a.clone(), b]));
//!
//! session.apply(&Selection::new(0, 0, a));
//! assert_eq!(session.progress(), 1);
//! ```

use crate::rules::{MiniGame, Step};

type ProgressHook = Box<dyn FnMut()>;

/// Owns a game state and applies moves to it.
pub struct Session<G: MiniGame> {
    state: G,
    progress: usize,
    on_progress: Option<ProgressHook>,
}

impl<G: MiniGame> Session<G> {
    /// Start a session with no hook.
    #[must_use]
    pub fn new(state: G) -> Self {
        Self {
            state,
            progress: 0,
            on_progress: None,
        }
    }

    /// Register a hook called once per progress event.
    #[must_use]
    pub fn with_progress_hook(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_progress = Some(Box::new(hook));
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &G {
        &self.state
    }

    /// Progress events seen so far.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Apply a move. Rejected moves change nothing and return no events.
    pub fn apply(&mut self, mv: &G::Move) -> Vec<G::Event> {
        let step = self.state.apply(mv);
        self.commit(step)
    }

    /// Apply a move, returning the rejection reason instead of absorbing it.
    pub fn try_apply(&mut self, mv: &G::Move) -> Result<Vec<G::Event>, G::Rejection> {
        let step = self.state.play(mv)?;
        Ok(self.commit(step))
    }

    /// Take ownership of the final state.
    #[must_use]
    pub fn into_state(self) -> G {
        self.state
    }

    fn commit(&mut self, step: Step<G>) -> Vec<G::Event> {
        let notifications = step.progress_count();
        self.state = step.state;
        self.progress += notifications;

        if let Some(hook) = self.on_progress.as_mut() {
            for _ in 0..notifications {
                hook();
            }
        }
        step.events
    }
}

impl<G: MiniGame + std::fmt::Debug> std::fmt::Debug for Session<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("progress", &self.progress)
            .field("has_hook", &self.on_progress.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Bin, LogoInput, LogoSortState};
    use crate::core::LogoSortConfig;
    use std::cell::Cell;
    use std::rc::Rc;

    fn logos(n: usize) -> Vec<LogoInput> {
        (0..n)
            .map(|i| LogoInput {
                id: Some(format!("l{i}")),
                title: format!("Logo {i}"),
                image: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_hook_fires_per_progress() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);

        let state = LogoSortState::new(LogoSortConfig::default(), logos(2)).unwrap();
        let mut session = Session::new(state).with_progress_hook(move || seen.set(seen.get() + 1));

        session.apply(&Bin::Left);
        session.apply(&Bin::Right);
        session.apply(&Bin::Right); // exhausted

        assert_eq!(calls.get(), 2);
        assert_eq!(session.progress(), 2);
        assert!(session.is_finished());
    }

    #[test]
    fn test_try_apply_reports_rejection() {
        let state = LogoSortState::new(LogoSortConfig::default(), logos(0)).unwrap();
        let mut session = Session::new(state);

        assert!(session.try_apply(&Bin::Left).is_err());
        assert_eq!(session.progress(), 0);
    }

    #[test]
    fn test_into_state() {
        let state = LogoSortState::new(LogoSortConfig::default(), logos(3)).unwrap();
        let mut session = Session::new(state);
        session.apply(&Bin::Left);

        let state = session.into_state();
        assert_eq!(state.sorted(), 1);
        assert_eq!(state.earnings_cents(), 5);
    }
}
