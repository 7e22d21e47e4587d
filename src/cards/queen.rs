//! Queen tokens and the fixed queen catalog.
//!
//! The catalog is a process-wide constant consulted once at game setup. A
//! `Queen` carries its catalog index as identity and its point value; the name
//! is looked up from the catalog on demand.

use serde::{Deserialize, Serialize};

/// Name and point value of every queen in the game.
pub const QUEEN_CATALOG: [(&str, u32); 12] = [
    ("Rose Queen", 5),
    ("Cake Queen", 5),
    ("Rainbow Queen", 5),
    ("Starfish Queen", 5),
    ("Moon Queen", 10),
    ("Peacock Queen", 10),
    ("Ladybug Queen", 10),
    ("Sunflower Queen", 10),
    ("Pancake Queen", 15),
    ("Cat Queen", 15),
    ("Dog Queen", 15),
    ("Heart Queen", 20),
];

/// Catalog index of a queen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QueenId(pub u8);

impl QueenId {
    /// Get the catalog index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A queen token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Queen {
    /// Identity (catalog index).
    pub id: QueenId,

    /// Points scored while awoken.
    pub points: u32,
}

impl Queen {
    /// Instantiate the queen at `index` in the catalog.
    #[must_use]
    pub fn from_catalog(index: usize) -> Option<Self> {
        QUEEN_CATALOG.get(index).map(|&(_, points)| Self {
            id: QueenId(index as u8),
            points,
        })
    }

    /// Look a queen up by its catalog name.
    ///
    /// ```
    /// use sleeping_queens::cards::Queen;
    ///
    /// let heart = Queen::by_name("Heart Queen").unwrap();
    /// assert_eq!(heart.points, 20);
    /// assert!(Queen::by_name("Jack").is_none());
    /// ```
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        QUEEN_CATALOG
            .iter()
            .position(|&(n, _)| n == name)
            .and_then(Self::from_catalog)
    }

    /// Every queen in catalog order.
    pub fn all() -> impl Iterator<Item = Queen> {
        (0..QUEEN_CATALOG.len()).filter_map(Self::from_catalog)
    }

    /// Catalog name, or `"?"` for an id outside the catalog.
    #[must_use]
    pub fn name(&self) -> &'static str {
        QUEEN_CATALOG.get(self.id.index()).map_or("?", |e| e.0)
    }

    /// True iff this value is exactly the catalog entry for its id.
    #[must_use]
    pub fn is_catalog(&self) -> bool {
        Self::from_catalog(self.id.index()) == Some(*self)
    }
}

impl std::fmt::Display for Queen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name(), self.points)
    }
}
