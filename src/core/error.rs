//! Error types.
//!
//! None of these are fatal. Rejected moves leave the state untouched and
//! the host simply re-issues valid input.

use thiserror::Error;

use super::entrant::EntrantId;

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("bracket size {0} is not a power of two")]
    SizeNotPowerOfTwo(usize),

    #[error("bracket size {0} is too small, need at least 2 slots")]
    SizeTooSmall(usize),

    #[error("logo cap must be at least 1")]
    ZeroLogos,
}

/// Why a bracket winner selection was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("bracket already has a champion")]
    Completed,

    #[error("round {requested} is not the active round {active}")]
    WrongRound { requested: usize, active: usize },

    #[error("round {round} has no matchup {matchup}")]
    NoSuchMatchup { round: usize, matchup: usize },

    #[error("entrant {entrant} is not in matchup {matchup}")]
    NotInMatchup { entrant: EntrantId, matchup: usize },

    #[error("placeholder {0} cannot win a matchup")]
    Placeholder(EntrantId),

    #[error("matchup {matchup} of round {round} is already decided")]
    AlreadyDecided { round: usize, matchup: usize },
}

/// Why a logo flick was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogoSortError {
    #[error("all {0} logos are already sorted")]
    Exhausted(usize),
}
