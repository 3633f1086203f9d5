//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Caller-assigned identifier (session id, user id, ...). The engine only
//! compares ids, it never interprets them.
//!
//! ## Player
//!
//! A seat at the table: hand, collected queens and derived score.
//! The seat's turn position is its index in `GameState::players`.

use serde::{Deserialize, Serialize};

use super::entity::{CardId, QueenId};
use crate::cards::{Card, Queen, QueenPower};

/// Caller-assigned player identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique id within the game.
    pub id: PlayerId,

    /// Display name (not interpreted).
    pub name: String,

    /// Cards in hand, at most `GameConfig::hand_size` between moves.
    pub hand: Vec<Card>,

    /// Awake queens collected by this player, in acquisition order.
    pub queens: Vec<Queen>,
}

impl Player {
    /// Create a player with an empty hand and no queens.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            queens: Vec::new(),
        }
    }

    /// Sum of collected queens' points.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.queens.iter().map(|q| q.points).sum()
    }

    /// Number of collected queens.
    #[must_use]
    pub fn queen_count(&self) -> usize {
        self.queens.len()
    }

    // === Hand ===

    /// Find a card in hand by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Check whether the hand holds any card satisfying `pred`.
    pub fn has_card(&self, pred: impl Fn(&Card) -> bool) -> bool {
        self.hand.iter().any(pred)
    }

    /// Remove a card from hand.
    ///
    /// Returns the card if it was found.
    pub fn take_card(&mut self, id: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(pos))
    }

    // === Queens ===

    /// Find a collected queen by id.
    #[must_use]
    pub fn queen(&self, id: QueenId) -> Option<&Queen> {
        self.queens.iter().find(|q| q.id == id)
    }

    /// Check whether this player holds a queen with the given power.
    #[must_use]
    pub fn has_power(&self, power: QueenPower) -> bool {
        self.queens.iter().any(|q| q.power == Some(power))
    }

    /// Remove a collected queen.
    pub fn take_queen(&mut self, id: QueenId) -> Option<Queen> {
        let pos = self.queens.iter().position(|q| q.id == id)?;
        Some(self.queens.remove(pos))
    }
}
