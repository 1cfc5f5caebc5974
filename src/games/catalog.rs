//! Home screen game catalog.

use serde::{Deserialize, Serialize};

/// Every mini-game on the home screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Swipe,
    #[serde(rename = "thisthat")]
    ThisThat,
    Bracket,
    #[serde(rename = "higherlower")]
    HigherLower,
    #[serde(rename = "soundbyte")]
    SoundByte,
    Highlight,
    #[serde(rename = "adlibpro")]
    AdLibPro,
    #[serde(rename = "logosort")]
    LogoSort,
}

impl GameKind {
    /// All games in home screen order.
    pub const ALL: [GameKind; 8] = [
        GameKind::Swipe,
        GameKind::ThisThat,
        GameKind::Bracket,
        GameKind::HigherLower,
        GameKind::SoundByte,
        GameKind::Highlight,
        GameKind::AdLibPro,
        GameKind::LogoSort,
    ];

    /// Stable route id.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            GameKind::Swipe => "swipe",
            GameKind::ThisThat => "thisthat",
            GameKind::Bracket => "bracket",
            GameKind::HigherLower => "higherlower",
            GameKind::SoundByte => "soundbyte",
            GameKind::Highlight => "highlight",
            GameKind::AdLibPro => "adlibpro",
            GameKind::LogoSort => "logosort",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameKind::Swipe => "Swipe",
            GameKind::ThisThat => "This/That",
            GameKind::Bracket => "Bracket",
            GameKind::HigherLower => "Higher/Lower",
            GameKind::SoundByte => "Sound Byte",
            GameKind::Highlight => "Highlight",
            GameKind::AdLibPro => "Ad Lib Pro",
            GameKind::LogoSort => "Logo Sort",
        }
    }

    /// Tagline shown under the name.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            GameKind::Swipe => "Flick your way to fortune! Swipe hot or not on trending products",
            GameKind::ThisThat => "Quick choice, big impact! Pick winners in head-to-head battles",
            GameKind::Bracket => "Tournament champion! Eliminate options to crown the best",
            GameKind::HigherLower => "Test your price wisdom! Guess values and rack up coins",
            GameKind::SoundByte => "Golden ears challenge! Rate audio that makes brands pop",
            GameKind::Highlight => "Spot what shines! Mark the magic in ad campaigns",
            GameKind::AdLibPro => "Word wizard wanted! Craft catchy phrases that sell",
            GameKind::LogoSort => "Brand mastermind! Organize logos and earn instant cash",
        }
    }

    /// Look up a game by route id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// True if this crate provides a rules core for the game.
    #[must_use]
    pub const fn has_engine(self) -> bool {
        matches!(self, GameKind::Bracket | GameKind::LogoSort)
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
