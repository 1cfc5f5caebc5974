//! Single-elimination bracket state machine.
//!
//! ## Lifecycle
//!
//! - `initialize` builds round 0 from the host's entrants, truncated and
//!   padded with placeholders to the bracket size. Active round is 0.
//! - `select_winner` records the winner of one matchup of the active round.
//!   When every matchup of the round is decided the next round becomes
//!   active. Deciding the final matchup crowns the champion instead.
//! - Once a champion exists every selection is rejected.
//!
//! ## Byes
//!
//! Off by default: an entrant only reaches round k+1 by being selected in
//! round k, so a matchup of two placeholders is never decided and an
//! under-populated bracket cannot finish. With `BracketConfig::with_byes`
//! such matchups are decided as soon as their round opens, by carrying the
//! first placeholder forward. Byes emit no progress, and a bracket without
//! real entrants has no byes, so it never crowns a placeholder.
//!
//! ## Ordering
//!
//! Matchups of the active round may be decided in any order. A decided
//! matchup cannot be changed.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::event::{BracketEvent, Selection, SelectionRecord};
use super::round::{Matchup, Round};
use crate::core::{BracketConfig, ConfigError, Entrant, SeedRng, Seeding, SelectionError};
use crate::games::GameKind;
use crate::rules::{MiniGame, Step};

/// Where the state machine is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BracketPhase {
    /// Waiting for selections in `round`.
    InProgress { round: usize },
    /// Terminal.
    Completed { champion: Entrant },
}

/// Bracket state.
///
/// Uses `im` persistent vectors, so the clone made by every transition
/// shares all untouched rounds with the previous state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketState {
    config: BracketConfig,

    /// Rounds produced so far. The round after the active one is always
    /// present (possibly all undecided) until the final round is active.
    rounds: Vector<Round>,

    active_round: usize,

    champion: Option<Entrant>,

    /// Accepted selections in order.
    history: Vector<SelectionRecord>,

    /// Non-placeholder entrants in round 0.
    real_entrants: usize,
}

/// Build a default 8-slot bracket.
pub fn initialize(entrants: impl IntoIterator<Item = Entrant>) -> BracketState {
    BracketState::build(BracketConfig::default(), entrants)
}

impl BracketState {
    /// Build a bracket with a custom configuration.
    pub fn initialize_with(
        config: BracketConfig,
        entrants: impl IntoIterator<Item = Entrant>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, entrants))
    }

    /// Build from a config that is known to be valid.
    fn build(config: BracketConfig, entrants: impl IntoIterator<Item = Entrant>) -> Self {
        let size = config.size;
        let mut field: Vec<Entrant> = entrants.into_iter().collect();

        if field.len() > size {
            tracing::warn!(supplied = field.len(), size, "too many entrants, truncating");
            field.truncate(size);
        }

        {
            let mut seen = FxHashSet::default();
            for entrant in &field {
                if !seen.insert(&entrant.id) {
                    tracing::warn!(id = %entrant.id, "duplicate entrant id");
                }
            }
        }

        if let Seeding::Shuffled { seed } = config.seeding {
            let mut rng = SeedRng::new(seed);
            rng.shuffle(&mut field);
            tracing::debug!(seed = rng.seed(), "entrants shuffled");
        }

        let real_entrants = field.iter().filter(|e| !e.is_placeholder()).count();
        let first_pad = field.len();
        field.extend((first_pad..size).map(Entrant::placeholder));

        let mut state = Self {
            config,
            rounds: Vector::unit(Round::filled(field)),
            active_round: 0,
            champion: None,
            history: Vector::new(),
            real_entrants,
        };
        state.open_round(0);

        tracing::debug!(size, real_entrants, "bracket initialized");
        state
    }

    /// Prepare the round after `round`, deciding its byes if enabled.
    fn open_round(&mut self, round: usize) {
        if round + 1 >= self.round_count() {
            return;
        }
        let Some(current) = self.rounds.get(round) else {
            return;
        };

        let mut next = Round::pending(current.matchup_count());
        if self.config.byes && self.real_entrants > 0 {
            for matchup in 0..current.matchup_count() {
                if let Some((Some(left), Some(right))) = current.pairing(matchup) {
                    if left.is_placeholder() && right.is_placeholder() {
                        next.set(matchup, left.clone());
                    }
                }
            }
        }
        self.rounds.push_back(next);
    }

    // === Transitions ===

    /// Record the winner of a matchup in the active round.
    ///
    /// Returns the next state and its events, or the reason the selection
    /// was rejected. `self` is never modified.
    pub fn select_winner(
        &self,
        round: usize,
        matchup: usize,
        winner: &Entrant,
    ) -> Result<Step<Self>, SelectionError> {
        if self.champion.is_some() {
            return Err(SelectionError::Completed);
        }
        if round != self.active_round {
            return Err(SelectionError::WrongRound {
                requested: round,
                active: self.active_round,
            });
        }
        if winner.is_placeholder() {
            return Err(SelectionError::Placeholder(winner.id.clone()));
        }

        let current = self
            .rounds
            .get(round)
            .ok_or(SelectionError::NoSuchMatchup { round, matchup })?;
        let (left, right) = current
            .pairing(matchup)
            .ok_or(SelectionError::NoSuchMatchup { round, matchup })?;

        let chosen = [left, right]
            .into_iter()
            .flatten()
            .find(|e| e.id == winner.id)
            .ok_or_else(|| SelectionError::NotInMatchup {
                entrant: winner.id.clone(),
                matchup,
            })?;
        if chosen.is_placeholder() {
            return Err(SelectionError::Placeholder(chosen.id.clone()));
        }

        let is_final = round + 1 == self.round_count();
        let decided = !is_final
            && self
                .rounds
                .get(round + 1)
                .is_some_and(|next| next.get(matchup).is_some());
        if decided {
            return Err(SelectionError::AlreadyDecided { round, matchup });
        }

        let chosen = chosen.clone();
        let mut next = self.clone();
        let mut events = Vec::with_capacity(3);

        next.history.push_back(SelectionRecord {
            round,
            matchup,
            winner: chosen.id.clone(),
        });
        events.push(BracketEvent::WinnerRecorded {
            round,
            matchup,
            winner: chosen.clone(),
        });
        tracing::debug!(round, matchup, winner = %chosen.id, "winner recorded");

        if is_final {
            next.active_round = self.round_count();
            next.champion = Some(chosen.clone());
            tracing::info!(champion = %chosen.id, "champion crowned");
            events.push(BracketEvent::ChampionCrowned(chosen));
        } else if let Some(upcoming) = next.rounds.get_mut(round + 1) {
            upcoming.set(matchup, chosen);
            if upcoming.is_full() {
                next.active_round = round + 1;
                next.open_round(round + 1);
                tracing::debug!(from = round, to = round + 1, "round advanced");
                events.push(BracketEvent::RoundAdvanced {
                    from: round,
                    to: round + 1,
                });
            }
        }

        events.push(BracketEvent::Progress);
        Ok(Step::new(next, events))
    }

    // === Views ===

    /// The configuration this bracket was built with.
    #[must_use]
    pub fn config(&self) -> &BracketConfig {
        &self.config
    }

    /// Total number of rounds: log2(size).
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.config.round_count()
    }

    /// Index of the active round. Equals `round_count()` once completed.
    #[must_use]
    pub fn active_round(&self) -> usize {
        self.active_round
    }

    /// Rounds produced so far.
    #[must_use]
    pub fn rounds(&self) -> &Vector<Round> {
        &self.rounds
    }

    /// Get a round by index.
    #[must_use]
    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    /// The champion, once the final matchup is decided.
    #[must_use]
    pub fn champion(&self) -> Option<&Entrant> {
        self.champion.as_ref()
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> BracketPhase {
        match &self.champion {
            Some(champion) => BracketPhase::Completed {
                champion: champion.clone(),
            },
            None => BracketPhase::InProgress {
                round: self.active_round,
            },
        }
    }

    /// True if the host supplied no real entrants.
    ///
    /// Hosts render a "nothing to show" state instead of a bracket.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.real_entrants == 0
    }

    /// Number of real entrants in round 0.
    #[must_use]
    pub fn real_entrants(&self) -> usize {
        self.real_entrants
    }

    /// Accepted selections in order.
    #[must_use]
    pub fn history(&self) -> &Vector<SelectionRecord> {
        &self.history
    }

    /// Number of accepted selections (and progress notifications).
    #[must_use]
    pub fn accepted_selections(&self) -> usize {
        self.history.len()
    }

    /// Matchups of a round with their recorded winners.
    #[must_use]
    pub fn matchups(&self, round: usize) -> Vec<Matchup<'_>> {
        let Some(current) = self.rounds.get(round) else {
            return Vec::new();
        };
        let next = self.rounds.get(round + 1);
        let is_final = round + 1 == self.round_count();

        (0..current.matchup_count())
            .filter_map(|index| {
                let (left, right) = current.pairing(index)?;
                let winner = if is_final {
                    self.champion.as_ref()
                } else {
                    next.and_then(|n| n.get(index))
                };
                Some(Matchup {
                    index,
                    left,
                    right,
                    winner,
                })
            })
            .collect()
    }

    /// Matchups of the active round. Empty once completed.
    #[must_use]
    pub fn current_matchups(&self) -> Vec<Matchup<'_>> {
        if self.champion.is_some() {
            return Vec::new();
        }
        self.matchups(self.active_round)
    }

    /// The partially decided round after the active one, for preview.
    ///
    /// `None` while the final round is active or once completed.
    #[must_use]
    pub fn next_round_preview(&self) -> Option<&Round> {
        if self.champion.is_some() {
            return None;
        }
        self.rounds.get(self.active_round + 1)
    }
}

impl MiniGame for BracketState {
    type Move = Selection;
    type Event = BracketEvent;
    type Rejection = SelectionError;

    fn kind(&self) -> GameKind {
        GameKind::Bracket
    }

    fn play(&self, mv: &Selection) -> Result<Step<Self>, SelectionError> {
        self.select_winner(mv.round, mv.matchup, &mv.winner)
    }

    fn is_finished(&self) -> bool {
        self.champion.is_some()
    }
}
