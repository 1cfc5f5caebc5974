//! Logo sort game implementation.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, LogoSortConfig, LogoSortError};
use crate::games::GameKind;
use crate::rules::{MiniGame, ProgressEvent, Step};

/// One of the two bins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bin {
    Left,
    Right,
}

impl Bin {
    const fn index(self) -> usize {
        match self {
            Bin::Left => 0,
            Bin::Right => 1,
        }
    }
}

/// Logo record as supplied by the host. `id` may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
}

/// A logo to sort.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Logo {
    pub id: String,
    pub title: String,
    pub image: String,
}

/// Events produced by a flick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogoSortEvent {
    /// A logo landed in a bin.
    Sorted { logo: Logo, bin: Bin },

    /// The last logo was sorted.
    Finished { earnings_cents: u64 },

    /// Host progress notification. Exactly one per flick.
    Progress,
}

impl ProgressEvent for LogoSortEvent {
    fn is_progress(&self) -> bool {
        matches!(self, LogoSortEvent::Progress)
    }
}

/// Logo sort state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoSortState {
    config: LogoSortConfig,
    logos: Vector<Logo>,
    current: usize,
    bin_counts: [u32; 2],
    earnings_cents: u64,
}

impl LogoSortState {
    /// Start a run with the given logos.
    ///
    /// Keeps at most `config.max_logos` logos. Missing or blank IDs become
    /// `ball-<index>`.
    pub fn new(
        config: LogoSortConfig,
        logos: impl IntoIterator<Item = LogoInput>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let logos: Vector<Logo> = logos
            .into_iter()
            .take(config.max_logos)
            .enumerate()
            .map(|(index, input)| Logo {
                id: input
                    .id
                    .filter(|id| !id.trim().is_empty())
                    .unwrap_or_else(|| format!("ball-{index}")),
                title: input.title,
                image: input.image,
            })
            .collect();

        tracing::debug!(logos = logos.len(), "logo sort started");

        Ok(Self {
            config,
            logos,
            current: 0,
            bin_counts: [0, 0],
            earnings_cents: 0,
        })
    }

    /// Sort the current logo into a bin.
    pub fn flick(&self, bin: Bin) -> Result<Step<Self>, LogoSortError> {
        let Some(logo) = self.logos.get(self.current).cloned() else {
            return Err(LogoSortError::Exhausted(self.logos.len()));
        };

        let mut next = self.clone();
        next.bin_counts[bin.index()] += 1;
        next.earnings_cents += self.config.earning_per_logo_cents;
        next.current += 1;

        tracing::debug!(logo = %logo.id, ?bin, "logo sorted");

        let mut events = vec![LogoSortEvent::Sorted { logo, bin }];
        if next.remaining() == 0 {
            tracing::info!(earnings_cents = next.earnings_cents, "logo sort finished");
            events.push(LogoSortEvent::Finished {
                earnings_cents: next.earnings_cents,
            });
        }
        events.push(LogoSortEvent::Progress);

        Ok(Step::new(next, events))
    }

    // === Views ===

    /// The logo waiting to be sorted.
    #[must_use]
    pub fn current_logo(&self) -> Option<&Logo> {
        self.logos.get(self.current)
    }

    /// All logos in this run.
    #[must_use]
    pub fn logos(&self) -> &Vector<Logo> {
        &self.logos
    }

    /// Number of logos sorted so far.
    #[must_use]
    pub fn sorted(&self) -> usize {
        self.current
    }

    /// Number of logos left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.logos.len() - self.current
    }

    /// Logos sorted into a bin.
    #[must_use]
    pub fn bin_count(&self, bin: Bin) -> u32 {
        self.bin_counts[bin.index()]
    }

    /// Label of a bin.
    #[must_use]
    pub fn bin_label(&self, bin: Bin) -> &str {
        &self.config.bin_labels[bin.index()]
    }

    /// Earnings so far, in cents.
    #[must_use]
    pub fn earnings_cents(&self) -> u64 {
        self.earnings_cents
    }
}

impl MiniGame for LogoSortState {
    type Move = Bin;
    type Event = LogoSortEvent;
    type Rejection = LogoSortError;

    fn kind(&self) -> GameKind {
        GameKind::LogoSort
    }

    fn play(&self, mv: &Bin) -> Result<Step<Self>, LogoSortError> {
        self.flick(*mv)
    }

    fn is_finished(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: Option<&str>, title: &str) -> LogoInput {
        LogoInput {
            id: id.map(str::to_owned),
            title: title.to_owned(),
            image: format!("{title}.svg"),
        }
    }

    #[test]
    fn test_missing_ids_get_ball_index() {
        let state = LogoSortState::new(
            LogoSortConfig::default(),
            vec![input(Some("acme"), "Acme"), input(None, "Globex"), input(Some("  "), "Initech")],
        )
        .unwrap();

        let ids: Vec<&str> = state.logos().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["acme", "ball-1", "ball-2"]);
    }

    #[test]
    fn test_flick_counts_and_earns() {
        let state = LogoSortState::new(
            LogoSortConfig::default(),
            vec![input(Some("a"), "A"), input(Some("b"), "B")],
        )
        .unwrap();

        let step = state.flick(Bin::Right).unwrap();
        let next = step.state;

        assert_eq!(next.bin_count(Bin::Right), 1);
        assert_eq!(next.bin_count(Bin::Left), 0);
        assert_eq!(next.earnings_cents(), 5);
        assert_eq!(next.current_logo().unwrap().id, "b");
        assert_eq!(step.events.len(), 2);
        assert_eq!(step.events[1], LogoSortEvent::Progress);

        // Input state untouched.
        assert_eq!(state.sorted(), 0);
    }

    #[test]
    fn test_last_flick_finishes() {
        let state =
            LogoSortState::new(LogoSortConfig::default(), vec![input(Some("a"), "A")]).unwrap();

        let step = state.flick(Bin::Left).unwrap();
        assert!(step.state.is_finished());
        assert!(step.events.contains(&LogoSortEvent::Finished { earnings_cents: 5 }));
        assert_eq!(step.state.flick(Bin::Left).unwrap_err(), LogoSortError::Exhausted(1));
    }

    #[test]
    fn test_bin_labels() {
        let state = LogoSortState::new(
            LogoSortConfig::new().with_bin_labels("Love it", "Skip"),
            Vec::new(),
        )
        .unwrap();

        assert_eq!(state.bin_label(Bin::Left), "Love it");
        assert_eq!(state.bin_label(Bin::Right), "Skip");
        assert!(state.is_finished());
    }

    #[test]
    fn test_logo_input_from_json() {
        let json = r#"[{"title":"Acme","image":"acme.svg"},{"id":"g","title":"Globex"}]"#;
        let logos: Vec<LogoInput> = serde_json::from_str(json).unwrap();

        assert_eq!(logos[0].id, None);
        assert_eq!(logos[1].id.as_deref(), Some("g"));
        assert!(logos[1].image.is_empty());
    }
}
