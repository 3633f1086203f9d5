//! Game state: the authoritative snapshot.
//!
//! ## GameState
//!
//! Plain data, cloned and replaced on every accepted operation:
//! - Seated players (hands, collected queens), turn pointer
//! - Sleeping-queen grid
//! - Draw and discard piles
//! - Phase, version counter, pending interrupt, result
//! - Seeded RNG and accepted-move history
//!
//! ## Interrupt
//!
//! At most one interrupt can be pending. It is a single enum field, so
//! "two interrupts at once" cannot be represented.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::config::GameConfig;
use super::entity::QueenId;
use super::player::{Player, PlayerId};
use super::rng::GameRng;
use crate::cards::Queen;
use crate::deck::DeckManager;
use crate::error::SnapshotError;
use crate::rules::GameResult;

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Seating players.
    #[default]
    Waiting,
    /// Moves are being accepted.
    Playing,
    /// A result has been declared.
    Ended,
}

/// A Knight or Potion attack waiting for the target's answer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingAttack {
    /// Player who played the attack card.
    pub attacker: PlayerId,
    /// Player whose queen is attacked.
    pub target: PlayerId,
    /// The attacked queen (still held by `target`).
    pub queen: QueenId,
    /// Caller-clock deadline (ms) for playing the counter-card.
    pub deadline: u64,
}

/// Something that suspends ordinary turn-taking until one player answers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interrupt {
    /// Ordinary play.
    #[default]
    None,
    /// Knight played; target may answer with a Dragon.
    KnightDefense(PendingAttack),
    /// Potion played; target may answer with a Wand.
    PotionDefense(PendingAttack),
    /// Jester revealed a number; `target` picks a sleeping queen.
    JesterSelection {
        jester_player: PlayerId,
        target: PlayerId,
        revealed_value: u8,
    },
    /// Rose Queen woken; `player` picks a second queen.
    RoseBonus {
        player: PlayerId,
        /// Turn advances past this player once the bonus is taken.
        resume_after: PlayerId,
    },
}

impl Interrupt {
    /// Whether nothing is pending.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Interrupt::None)
    }

    /// The only player allowed to answer, if anything is pending.
    #[must_use]
    pub fn responder(&self) -> Option<&PlayerId> {
        match self {
            Interrupt::None => None,
            Interrupt::KnightDefense(attack) | Interrupt::PotionDefense(attack) => {
                Some(&attack.target)
            }
            Interrupt::JesterSelection { target, .. } => Some(target),
            Interrupt::RoseBonus { player, .. } => Some(player),
        }
    }

    /// The pending attack, for either defense window.
    #[must_use]
    pub fn attack(&self) -> Option<&PendingAttack> {
        match self {
            Interrupt::KnightDefense(attack) | Interrupt::PotionDefense(attack) => Some(attack),
            Interrupt::None
            | Interrupt::JesterSelection { .. }
            | Interrupt::RoseBonus { .. } => None,
        }
    }
}

/// The complete game snapshot.
///
/// Callers hold immutable snapshots; the rules engine builds a new one
/// for every accepted operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Rules this game was created with.
    pub config: GameConfig,

    /// Players in seat order.
    pub players: Vec<Player>,

    /// Index into `players` of the player whose turn it is.
    pub current: usize,

    /// Queen grid; `None` marks a slot whose queen is awake.
    pub sleeping: Vec<Option<Queen>>,

    /// Draw and discard piles.
    pub deck: DeckManager,

    /// Lifecycle phase.
    pub phase: Phase,

    /// Incremented once per accepted operation.
    pub version: u64,

    /// Pending interrupt, if any.
    pub interrupt: Interrupt,

    /// Set when the game ends.
    pub result: Option<GameResult>,

    /// Seeded RNG (shuffles, first player).
    pub rng: GameRng,

    /// Accepted moves, oldest first.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// Create an empty game waiting for players.
    #[must_use]
    pub fn new(config: GameConfig, rng: GameRng) -> Self {
        Self {
            config,
            players: Vec::new(),
            current: 0,
            sleeping: Vec::new(),
            deck: DeckManager::default(),
            phase: Phase::Waiting,
            version: 0,
            interrupt: Interrupt::None,
            result: None,
            rng,
            history: Vector::new(),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    // === Players ===

    /// Seat index of a player.
    #[must_use]
    pub fn player_index(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// The player whose turn it is (`None` before seating).
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// Index of the seat after `index`.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.players.len().max(1)
    }

    // === Queens ===

    /// Iterate over sleeping queens in grid order.
    pub fn sleeping_queens(&self) -> impl Iterator<Item = &Queen> {
        self.sleeping.iter().flatten()
    }

    /// Number of sleeping queens.
    #[must_use]
    pub fn sleeping_count(&self) -> usize {
        self.sleeping_queens().count()
    }

    /// Find a sleeping queen by id.
    #[must_use]
    pub fn sleeping_queen(&self, id: QueenId) -> Option<&Queen> {
        self.sleeping_queens().find(|q| q.id == id)
    }

    /// Remove a sleeping queen from the grid, leaving her slot empty.
    pub fn take_sleeping(&mut self, id: QueenId) -> Option<Queen> {
        self.sleeping
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|q| q.id == id))?
            .take()
    }

    /// Put a queen to sleep in the first empty grid slot.
    pub fn put_to_sleep(&mut self, mut queen: Queen) {
        queen.awake = false;
        match self.sleeping.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => *slot = Some(queen),
            None => self.sleeping.push(Some(queen)),
        }
    }

    /// Queens in the grid plus queens held by players.
    #[must_use]
    pub fn total_queens(&self) -> usize {
        self.sleeping_count() + self.players.iter().map(Player::queen_count).sum::<usize>()
    }

    // === Cards ===

    /// Cards in the piles plus cards in hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.total_cards() + self.players.iter().map(|p| p.hand.len()).sum::<usize>()
    }

    /// Draw up to `n` cards into a player's hand.
    ///
    /// Returns how many were drawn.
    pub fn draw_into(&mut self, index: usize, n: usize) -> usize {
        let drawn = self.deck.draw(n, &mut self.rng);
        let count = drawn.len();
        if let Some(player) = self.players.get_mut(index) {
            player.hand.extend(drawn);
        }
        count
    }

    /// Refill a player's hand up to the configured hand size.
    pub fn refill_hand(&mut self, index: usize) -> usize {
        let missing = self
            .players
            .get(index)
            .map_or(0, |p| self.config.hand_size.saturating_sub(p.hand.len()));
        self.draw_into(index, missing)
    }

    // === Snapshots ===

    /// Encode the snapshot for storage.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a stored snapshot.
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
