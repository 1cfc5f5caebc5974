//! Game configuration types.
//!
//! Hosts configure each game at session start:
//! - `BracketConfig`: bracket size and seeding
//! - `LogoSortConfig`: logo cap, earnings and bin labels
//!
//! Defaults reproduce the shipped games, so most hosts use `Default`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default number of round 0 slots.
pub const DEFAULT_BRACKET_SIZE: usize = 8;

/// Default cap on logos in one sorting run.
pub const DEFAULT_MAX_LOGOS: usize = 20;

/// Default earnings per sorted logo, in cents.
pub const DEFAULT_EARNING_PER_LOGO_CENTS: u64 = 5;

/// How real entrants are ordered in round 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seeding {
    /// Keep the host's order.
    #[default]
    InOrder,
    /// Deterministic shuffle of the real entrants.
    Shuffled {
        /// RNG seed.
        seed: u64,
    },
}

/// Configuration for a single-elimination bracket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketConfig {
    /// Number of round 0 slots. Must be a power of two, at least 2.
    pub size: usize,

    /// Ordering of real entrants.
    pub seeding: Seeding,

    /// Decide placeholder-vs-placeholder matchups when their round opens.
    #[serde(default)]
    pub byes: bool,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BRACKET_SIZE,
            seeding: Seeding::InOrder,
            byes: false,
        }
    }
}

impl BracketConfig {
    /// Create the default 8-slot configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bracket size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Shuffle real entrants with the given seed.
    #[must_use]
    pub fn shuffled(mut self, seed: u64) -> Self {
        self.seeding = Seeding::Shuffled { seed };
        self
    }

    /// Carry placeholders through matchups of two placeholders.
    ///
    /// Lets an under-populated bracket reach a champion.
    #[must_use]
    pub fn with_byes(mut self) -> Self {
        self.byes = true;
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(ConfigError::SizeTooSmall(self.size));
        }
        if !self.size.is_power_of_two() {
            return Err(ConfigError::SizeNotPowerOfTwo(self.size));
        }
        Ok(())
    }

    /// Number of elimination rounds: log2(size).
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.size.trailing_zeros() as usize
    }
}

/// Configuration for the logo sorting game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoSortConfig {
    /// Logos beyond this count are dropped.
    pub max_logos: usize,

    /// Earnings credited per sorted logo, in cents.
    pub earning_per_logo_cents: u64,

    /// Labels of the left and right bins.
    pub bin_labels: [String; 2],
}

impl Default for LogoSortConfig {
    fn default() -> Self {
        Self {
            max_logos: DEFAULT_MAX_LOGOS,
            earning_per_logo_cents: DEFAULT_EARNING_PER_LOGO_CENTS,
            bin_labels: ["Subscribe".to_string(), "Don't Use".to_string()],
        }
    }
}

impl LogoSortConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logo cap.
    #[must_use]
    pub fn with_max_logos(mut self, max: usize) -> Self {
        self.max_logos = max;
        self
    }

    /// Set earnings per sorted logo.
    #[must_use]
    pub fn with_earning_cents(mut self, cents: u64) -> Self {
        self.earning_per_logo_cents = cents;
        self
    }

    /// Override the bin labels.
    #[must_use]
    pub fn with_bin_labels(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.bin_labels = [left.into(), right.into()];
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_logos == 0 {
            return Err(ConfigError::ZeroLogos);
        }
        Ok(())
    }
}
