//! Game catalog and the game cores beyond the bracket.

pub mod catalog;
pub mod logo_sort;

pub use catalog::GameKind;
pub use logo_sort::{Bin, Logo, LogoInput, LogoSortEvent, LogoSortState};
