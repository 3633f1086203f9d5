//! Non-queen cards.
//!
//! A `Card` is an immutable id + kind pair. The kind decides everything a
//! card can do; there are no per-instance attributes.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;

/// What a card is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Number card, value 1-10.
    Number(u8),
    /// Wakes a sleeping queen.
    King,
    /// Steals an opponent's queen.
    Knight,
    /// Blocks a Knight.
    Dragon,
    /// Puts an opponent's queen to sleep.
    Potion,
    /// Blocks a Potion.
    Wand,
    /// Reveals the top of the draw pile.
    Jester,
}

impl CardKind {
    /// Number value, or `None` for power cards.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            CardKind::Number(v) => Some(v),
            CardKind::King
            | CardKind::Knight
            | CardKind::Dragon
            | CardKind::Potion
            | CardKind::Wand
            | CardKind::Jester => None,
        }
    }

    /// King, Knight, Dragon, Potion, Wand or Jester.
    #[must_use]
    pub const fn is_power(self) -> bool {
        self.value().is_none()
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Number(v) => write!(f, "{v}"),
            CardKind::King => f.write_str("King"),
            CardKind::Knight => f.write_str("Knight"),
            CardKind::Dragon => f.write_str("Dragon"),
            CardKind::Potion => f.write_str("Potion"),
            CardKind::Wand => f.write_str("Wand"),
            CardKind::Jester => f.write_str("Jester"),
        }
    }
}

/// A physical card.
///
/// ## Example
///
/// ```
/// use sleeping_queens::cards::{Card, CardKind};
/// use sleeping_queens::core::CardId;
///
/// let seven = Card::new(CardId::new(1), CardKind::Number(7));
/// assert_eq!(seven.value(), Some(7));
/// assert!(!seven.is_power());
///
/// let king = Card::new(CardId::new(2), CardKind::King);
/// assert!(king.is_power());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id.
    pub id: CardId,
    /// Card kind.
    pub kind: CardKind,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(id: CardId, kind: CardKind) -> Self {
        Self { id, kind }
    }

    /// Number value, or `None` for power cards.
    #[must_use]
    pub const fn value(&self) -> Option<u8> {
        self.kind.value()
    }

    /// Whether this is a power card.
    #[must_use]
    pub const fn is_power(&self) -> bool {
        self.kind.is_power()
    }
}
