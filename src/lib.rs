//! # minigame-engine
//!
//! Rules cores for a rewards-style mini-game app. The UI renders cards,
//! balls and brackets; this crate owns the state behind them.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every move is `(&state, move) -> next state`.
//!    Rejected moves return an error and leave the state untouched.
//!
//! 2. **Progress as Output**: Accepted moves emit exactly one progress
//!    event. Hosts map it to their score/earnings update.
//!
//! 3. **Framework-Free**: Nothing here knows about rendering, gestures or
//!    animation timing.
//!
//! ## Modules
//!
//! - `core`: Entrants, configuration, RNG, errors
//! - `rules`: `MiniGame` trait implemented by every game core
//! - `bracket`: Single-elimination bracket state machine
//! - `games`: Game catalog and the logo sort game
//! - `session`: Driver that owns a state and forwards progress to a hook

pub mod core;
pub mod rules;
pub mod bracket;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Entrant, EntrantId,
    BracketConfig, LogoSortConfig, Seeding, SeedRng,
    ConfigError, LogoSortError, SelectionError,
};

pub use crate::rules::{MiniGame, ProgressEvent, Step};

pub use crate::bracket::{
    initialize, BracketEvent, BracketPhase, BracketState, Matchup, Round, Selection,
    SelectionRecord,
};

pub use crate::games::{Bin, GameKind, Logo, LogoInput, LogoSortEvent, LogoSortState};

pub use crate::session::Session;
