//! Single-elimination bracket engine.
//!
//! A pure state machine over a fixed-size bracket:
//! - `initialize` builds round 0 (truncate, pad with placeholders)
//! - `BracketState::select_winner` decides one matchup of the active round
//! - Deciding the final matchup crowns the champion
//!
//! Transitions never mutate their input; they return the next state and the
//! events it produced, including one `BracketEvent::Progress` per accepted
//! selection.

pub mod round;
pub mod event;
pub mod state;

pub use round::{Matchup, Round};
pub use event::{BracketEvent, Selection, SelectionRecord};
pub use state::{initialize, BracketPhase, BracketState};
