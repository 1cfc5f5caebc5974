//! Entrant identity.
//!
//! Every item competing in a bracket is an `Entrant`. Brackets have a fixed
//! size, so an under-populated field is padded with placeholder entrants
//! that render as empty slots and can never win a pairing.
//!
//! ## Usage
//!
//! ```
//! use minigame_engine::core::Entrant;
//!
//! let cola = Entrant::new("cola", "Cola", "img/cola.png");
//! assert!(!cola.is_placeholder());
//!
//! let pad = Entrant::placeholder(5);
//! assert!(pad.is_placeholder());
//! assert_eq!(pad.id.as_str(), "empty-5");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier of an entrant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntrantId(pub String);

impl EntrantId {
    /// Create an entrant ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntrantId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for EntrantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntrantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An item competing in a bracket.
///
/// Deserializes from the host's `{id, title, image}` records; `empty`
/// defaults to `false` so hosts never send it for real items.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entrant {
    /// Unique identifier.
    pub id: EntrantId,

    /// Display title.
    pub title: String,

    /// Image reference (URL or asset path).
    pub image: String,

    /// Padding placeholder flag.
    #[serde(default)]
    pub empty: bool,
}

impl Entrant {
    /// Create a real entrant.
    pub fn new(
        id: impl Into<EntrantId>,
        title: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: image.into(),
            empty: false,
        }
    }

    /// Create the placeholder for a round 0 slot.
    ///
    /// The ID is derived from the slot index, so placeholders in one
    /// bracket never share an ID.
    #[must_use]
    pub fn placeholder(slot: usize) -> Self {
        Self {
            id: EntrantId(format!("empty-{slot}")),
            title: String::new(),
            image: String::new(),
            empty: true,
        }
    }

    /// Check if this entrant is a padding placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.empty
    }
}
