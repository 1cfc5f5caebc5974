//! Rounds and matchups.
//!
//! A round is an ordered list of slots. Slots `2m` and `2m + 1` form
//! matchup `m`, whose winner lands in slot `m` of the next round. Slots of
//! future rounds stay empty until their matchup is decided.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Entrant;

/// Slots stored inline per round. Only the opening round of a default
/// bracket spills to the heap.
const INLINE_SLOTS: usize = 4;

/// One round of a bracket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    slots: SmallVec<[Option<Entrant>; INLINE_SLOTS]>,
}

impl Round {
    /// Create a round with every slot occupied.
    #[must_use]
    pub fn filled(entrants: impl IntoIterator<Item = Entrant>) -> Self {
        Self {
            slots: entrants.into_iter().map(Some).collect(),
        }
    }

    /// Create a round of `len` undecided slots.
    #[must_use]
    pub fn pending(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the round has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Option<Entrant>] {
        &self.slots
    }

    /// The entrant in a slot, if decided.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Entrant> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Number of decided slots.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Check if every slot is decided.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled_count() == self.len()
    }

    /// Number of matchups: ceil(len / 2).
    #[must_use]
    pub fn matchup_count(&self) -> usize {
        self.len().div_ceil(2)
    }

    /// The two slots of a matchup.
    ///
    /// Returns `None` if the matchup index is out of range. The right side
    /// is `None` for the unpaired last slot of an odd-length round.
    #[must_use]
    pub fn pairing(&self, matchup: usize) -> Option<(Option<&Entrant>, Option<&Entrant>)> {
        if matchup >= self.matchup_count() {
            return None;
        }
        Some((self.get(2 * matchup), self.get(2 * matchup + 1)))
    }

    /// Iterate over decided entrants in slot order.
    pub fn entrants(&self) -> impl Iterator<Item = &Entrant> {
        self.slots.iter().flatten()
    }

    /// Decide a slot. Returns false if the slot is out of range.
    pub(crate) fn set(&mut self, slot: usize, entrant: Entrant) -> bool {
        match self.slots.get_mut(slot) {
            Some(cell) => {
                *cell = Some(entrant);
                true
            }
            None => false,
        }
    }
}

/// Render view of one matchup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Matchup<'a> {
    /// Matchup index within its round.
    pub index: usize,

    /// Entrant in slot `2 * index`.
    pub left: Option<&'a Entrant>,

    /// Entrant in slot `2 * index + 1`.
    pub right: Option<&'a Entrant>,

    /// Winner, once decided.
    pub winner: Option<&'a Entrant>,
}

impl Matchup<'_> {
    /// Check if a winner has been recorded.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Check if both sides are placeholders (a bye).
    #[must_use]
    pub fn is_bye(&self) -> bool {
        matches!(
            (self.left, self.right),
            (Some(l), Some(r)) if l.is_placeholder() && r.is_placeholder()
        )
    }
}
