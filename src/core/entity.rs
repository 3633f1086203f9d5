//! Identifiers for the physical pieces of the game.
//!
//! Every card and every queen carries a unique id assigned by the catalog
//! when the game is created. Ids never change and are never reused, so a
//! move can refer to "this King" or "that queen" regardless of where the
//! piece currently sits.
//!
//! ## Usage
//!
//! ```
//! use sleeping_queens::core::{CardId, QueenId};
//!
//! let card = CardId::new(12);
//! let queen = QueenId::new(3);
//!
//! assert_eq!(card.raw(), 12);
//! assert_eq!(format!("{}", queen), "Queen(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier of a non-queen card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Unique identifier of a queen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QueenId(pub u8);

impl QueenId {
    /// Create a new queen ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for QueenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Queen({})", self.0)
    }
}
