//! Logo sort game.
//!
//! A run of up to 20 logos, shown one at a time:
//! - Each flick sorts the current logo into the left or right bin
//! - Every sorted logo earns a fixed amount (5 cents by default)
//! - The run ends when every logo is sorted

mod game;

pub use game::{Bin, Logo, LogoInput, LogoSortEvent, LogoSortState};
