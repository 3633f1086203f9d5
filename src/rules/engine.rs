//! Rules engine trait.
//!
//! The engine is a pure snapshot-in, snapshot-out state machine:
//! - `validate` decides whether a move is legal
//! - `apply` mutates a private copy of the snapshot
//! - `submit_move` ties the two together, atomically
//!
//! Callers serialize submissions per game; nothing here blocks or keeps
//! state between calls.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::action::{Move, MoveRecord};
use crate::core::config::GameConfig;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::Result;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Genuine tie on score and queen count.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won (alone or shared).
    #[must_use]
    pub fn is_winner(&self, player: &PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => p == player,
            GameResult::Winners(ps) => ps.contains(player),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate`: Must not mutate anything
/// - `apply`: Only called after `validate` accepted the move; works on a
///   clone, so an error discards every partial change
/// - `legal_moves`: Every returned move must pass `validate`
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Check a move against the current snapshot.
    fn validate(&self, state: &GameState, mv: &Move) -> Result<()>;

    /// Apply an accepted move to a working copy of the snapshot.
    fn apply(&self, state: &mut GameState, mv: &Move) -> Result<()>;

    /// Enumerate the moves `player` may submit right now.
    fn legal_moves(&self, state: &GameState, player: &PlayerId) -> Vec<Move>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result.clone()
    }

    // === Convenience Methods ===

    /// Validate without applying.
    fn is_valid_move(&self, state: &GameState, mv: &Move) -> Result<()> {
        self.validate(state, mv)
    }

    /// Validate and apply a move, producing the next snapshot.
    ///
    /// On rejection the input snapshot is untouched and the reason is
    /// returned. On success the new snapshot's `version` is one higher and
    /// the move is appended to its history.
    fn submit_move(&self, state: &GameState, mv: &Move) -> Result<GameState> {
        if let Err(err) = self.validate(state, mv) {
            trace!("rejected {} from {}: {}", mv.kind.name(), mv.player, err);
            return Err(err);
        }

        let mut next = state.clone();
        self.apply(&mut next, mv)?;
        next.version += 1;
        next.history.push_back(MoveRecord::new(next.version, mv.clone()));

        let role = if mv.kind.is_response() { "response" } else { "move" };
        debug!("applied {role} {} from {} (version {})", mv.kind.name(), mv.player, next.version);
        Ok(next)
    }

    /// Re-apply a sequence of moves to a starting snapshot.
    ///
    /// Stops at the first rejected move.
    fn replay(&self, start: &GameState, moves: &[Move]) -> Result<GameState> {
        moves
            .iter()
            .try_fold(start.clone(), |state, mv| self.submit_move(&state, mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::from("b"));
        assert!(!result.is_winner(&PlayerId::from("a")));
        assert!(result.is_winner(&PlayerId::from("b")));

        let tie = GameResult::Winners(vec![PlayerId::from("a"), PlayerId::from("c")]);
        assert!(tie.is_winner(&PlayerId::from("a")));
        assert!(!tie.is_winner(&PlayerId::from("b")));
        assert!(tie.is_winner(&PlayerId::from("c")));
    }
}
