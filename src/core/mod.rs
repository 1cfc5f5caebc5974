//! Core types: entrants, configuration, RNG, errors.
//!
//! These are shared by every game core. Games take their configuration at
//! construction and never read global state.

pub mod entrant;
pub mod config;
pub mod rng;
pub mod error;

pub use entrant::{Entrant, EntrantId};
pub use config::{
    BracketConfig, LogoSortConfig, Seeding, DEFAULT_BRACKET_SIZE, DEFAULT_EARNING_PER_LOGO_CENTS,
    DEFAULT_MAX_LOGOS,
};
pub use rng::SeedRng;
pub use error::{ConfigError, LogoSortError, SelectionError};
