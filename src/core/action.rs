//! Move representation: who, what, when.
//!
//! A `Move` is the plain record a client submits. `MoveKind` is a closed
//! enum with one variant per move type, including the defense, allow and
//! selection responses, so every `match` over moves is checked for
//! coverage by the compiler.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::{CardId, QueenId};
use super::player::PlayerId;

/// The kind of move and its payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Wake a sleeping queen with a King.
    PlayKing { card: CardId, queen: QueenId },

    /// Steal another player's queen with a Knight.
    PlayKnight {
        card: CardId,
        target: PlayerId,
        queen: QueenId,
    },

    /// Put another player's queen back to sleep with a Potion.
    PlayPotion {
        card: CardId,
        target: PlayerId,
        queen: QueenId,
    },

    /// Reveal the top card of the draw pile.
    PlayJester { card: CardId },

    /// Wake a queen after being counted out by a Jester reveal.
    SelectJesterQueen { queen: QueenId },

    /// Block a pending Knight attack.
    PlayDragon { card: CardId },

    /// Block a pending Potion attack.
    PlayWand { card: CardId },

    /// Let a pending Knight attack through.
    AllowKnightAttack,

    /// Let a pending Potion attack through.
    AllowPotionAttack,

    /// Wake a second queen after waking the Rose Queen.
    RoseQueenBonus { queen: QueenId },

    /// Discard a single card, a pair or an equation, in submission order.
    Discard { cards: SmallVec<[CardId; 5]> },
}

impl MoveKind {
    /// Short lowercase name, used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MoveKind::PlayKing { .. } => "play_king",
            MoveKind::PlayKnight { .. } => "play_knight",
            MoveKind::PlayPotion { .. } => "play_potion",
            MoveKind::PlayJester { .. } => "play_jester",
            MoveKind::SelectJesterQueen { .. } => "select_jester_queen",
            MoveKind::PlayDragon { .. } => "play_dragon",
            MoveKind::PlayWand { .. } => "play_wand",
            MoveKind::AllowKnightAttack => "allow_knight_attack",
            MoveKind::AllowPotionAttack => "allow_potion_attack",
            MoveKind::RoseQueenBonus { .. } => "rose_queen_bonus",
            MoveKind::Discard { .. } => "discard",
        }
    }

    /// Responses are answered by the player an interrupt waits on,
    /// not by the player whose turn it is.
    #[must_use]
    pub fn is_response(&self) -> bool {
        match self {
            MoveKind::SelectJesterQueen { .. }
            | MoveKind::PlayDragon { .. }
            | MoveKind::PlayWand { .. }
            | MoveKind::AllowKnightAttack
            | MoveKind::AllowPotionAttack
            | MoveKind::RoseQueenBonus { .. } => true,
            MoveKind::PlayKing { .. }
            | MoveKind::PlayKnight { .. }
            | MoveKind::PlayPotion { .. }
            | MoveKind::PlayJester { .. }
            | MoveKind::Discard { .. } => false,
        }
    }
}

/// A submitted move.
///
/// ## Example
///
/// ```
/// use sleeping_queens::core::{CardId, Move, MoveKind, PlayerId, QueenId};
///
/// let wake = Move::new(
///     PlayerId::from("alice"),
///     MoveKind::PlayKing { card: CardId::new(40), queen: QueenId::new(3) },
/// )
/// .at(1_700_000_000_000);
///
/// assert_eq!(wake.kind.name(), "play_king");
/// assert!(!wake.kind.is_response());
///
/// let discard = Move::discard(PlayerId::from("bob"), &[CardId::new(1), CardId::new(2)]);
/// assert_eq!(discard.timestamp, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The submitting player.
    pub player: PlayerId,

    /// What the player does.
    pub kind: MoveKind,

    /// Caller clock at submission, in milliseconds. Used to stamp
    /// defense-window deadlines.
    pub timestamp: u64,
}

impl Move {
    /// Create a move with timestamp 0.
    #[must_use]
    pub fn new(player: PlayerId, kind: MoveKind) -> Self {
        Self {
            player,
            kind,
            timestamp: 0,
        }
    }

    /// Create a discard move.
    #[must_use]
    pub fn discard(player: PlayerId, cards: &[CardId]) -> Self {
        Self::new(
            player,
            MoveKind::Discard {
                cards: SmallVec::from_slice(cards),
            },
        )
    }

    /// Set the submission timestamp.
    #[must_use]
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// An accepted move with the version it produced.
///
/// Used for:
/// - Replay from a starting snapshot
/// - Audit and debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// `GameState::version` after the move was applied.
    pub version: u64,

    /// The move as submitted.
    pub mv: Move,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(version: u64, mv: Move) -> Self {
        Self { version, mv }
    }
}
