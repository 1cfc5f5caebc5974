//! Mini-game trait for game implementations.
//!
//! Games implement `MiniGame` to define:
//! - Accepted moves and their rejection reasons
//! - How a move turns one state value into the next
//! - When the game is over
//!
//! Hosts drive games through `MiniGame::apply` or a `Session`, and render
//! whatever state comes back.

pub mod engine;

pub use engine::{MiniGame, ProgressEvent, Step};
