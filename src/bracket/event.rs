//! Bracket moves and events.
//!
//! Progress is an output value: every accepted selection emits exactly one
//! `BracketEvent::Progress`, which the host maps to its score/earnings
//! update.

use serde::{Deserialize, Serialize};

use crate::core::{Entrant, EntrantId};
use crate::rules::ProgressEvent;

/// A "winner selected" input from the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Round the host believes is active.
    pub round: usize,

    /// Matchup index within that round.
    pub matchup: usize,

    /// Chosen entrant. Matched against the pairing by ID.
    pub winner: Entrant,
}

impl Selection {
    /// Create a selection.
    #[must_use]
    pub fn new(round: usize, matchup: usize, winner: Entrant) -> Self {
        Self {
            round,
            matchup,
            winner,
        }
    }
}

/// An accepted selection, kept in bracket history.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub round: usize,
    pub matchup: usize,
    pub winner: EntrantId,
}

/// Something that happened while applying a selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BracketEvent {
    /// A matchup was decided.
    WinnerRecorded {
        round: usize,
        matchup: usize,
        winner: Entrant,
    },

    /// Every matchup of `from` is decided; `to` is now active.
    RoundAdvanced { from: usize, to: usize },

    /// The final matchup was decided.
    ChampionCrowned(Entrant),

    /// Host progress notification. Exactly one per accepted selection.
    Progress,
}

impl ProgressEvent for BracketEvent {
    fn is_progress(&self) -> bool {
        matches!(self, BracketEvent::Progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_progress_counts() {
        assert!(BracketEvent::Progress.is_progress());
        assert!(!BracketEvent::RoundAdvanced { from: 0, to: 1 }.is_progress());
        assert!(!BracketEvent::ChampionCrowned(Entrant::new("a", "A", "")).is_progress());
    }

    #[test]
    fn test_selection_from_json() {
        let json = r#"{"round":0,"matchup":2,"winner":{"id":"e","title":"E","image":"e.png"}}"#;
        let selection: Selection = serde_json::from_str(json).unwrap();
        assert_eq!(selection, Selection::new(0, 2, Entrant::new("e", "E", "e.png")));
    }
}
