//! Queens: the scoring pieces.

use serde::{Deserialize, Serialize};

use crate::core::entity::QueenId;

/// Special rule attached to a queen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueenPower {
    /// Waking her grants a second wake.
    Rose,
    /// Cannot be held together with the Dog Queen.
    Cat,
    /// Cannot be held together with the Cat Queen.
    Dog,
}

impl QueenPower {
    /// The power that cannot be held alongside this one.
    #[must_use]
    pub const fn rival(self) -> Option<QueenPower> {
        match self {
            QueenPower::Cat => Some(QueenPower::Dog),
            QueenPower::Dog => Some(QueenPower::Cat),
            QueenPower::Rose => None,
        }
    }
}

/// A queen card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Queen {
    /// Unique id.
    pub id: QueenId,
    /// Display name.
    pub name: String,
    /// Score value.
    pub points: u32,
    /// Awake queens are held by a player; asleep ones sit in the grid.
    pub awake: bool,
    /// Special rule, if any.
    pub power: Option<QueenPower>,
}

impl Queen {
    /// Create a sleeping queen.
    #[must_use]
    pub fn new(
        id: QueenId,
        name: impl Into<String>,
        points: u32,
        power: Option<QueenPower>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            points,
            awake: false,
            power,
        }
    }

    /// Whether this is the Rose Queen.
    #[must_use]
    pub fn is_rose(&self) -> bool {
        self.power == Some(QueenPower::Rose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rivals() {
        assert_eq!(QueenPower::Cat.rival(), Some(QueenPower::Dog));
        assert_eq!(QueenPower::Dog.rival(), Some(QueenPower::Cat));
        assert_eq!(QueenPower::Rose.rival(), None);
    }

    #[test]
    fn test_new_queen_sleeps() {
        let queen = Queen::new(QueenId::new(0), "Rose Queen", 5, Some(QueenPower::Rose));
        assert!(!queen.awake);
        assert!(queen.is_rose());
    }
}
