//! Game lifecycle: creation, seating and the deal.
//!
//! ## Usage
//!
//! ```
//! use sleeping_queens::core::{GameConfig, Phase, PlayerId};
//! use sleeping_queens::rules::SleepingQueens;
//!
//! let engine = SleepingQueens::new(GameConfig::default()).unwrap();
//! let state = engine.create_game(Some(42));
//! let state = engine.add_player(&state, PlayerId::from("alice"), "Alice").unwrap();
//! let state = engine.add_player(&state, PlayerId::from("bob"), "Bob").unwrap();
//! let state = engine.start_game(&state).unwrap();
//!
//! assert_eq!(state.phase, Phase::Playing);
//! assert_eq!(state.sleeping_count(), 12);
//! assert!(state.players.iter().all(|p| p.hand.len() == 5));
//! ```

use log::{debug, info};

use super::orchestrator::SleepingQueens;
use crate::cards::catalog;
use crate::core::config::GameConfig;
use crate::core::player::{Player, PlayerId};
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Phase};
use crate::deck::DeckManager;
use crate::error::{GameError, Result};

impl SleepingQueens {
    /// Create an engine for the given rules.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an empty game waiting for players.
    ///
    /// With `None` the RNG is seeded from entropy.
    #[must_use]
    pub fn create_game(&self, seed: Option<u64>) -> GameState {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        debug!("created game with seed {}", rng.seed());
        GameState::new(self.config.clone(), rng)
    }

    /// Seat a player at the next free position.
    pub fn add_player(
        &self,
        state: &GameState,
        id: PlayerId,
        name: impl Into<String>,
    ) -> Result<GameState> {
        if state.phase != Phase::Waiting {
            return Err(GameError::GameAlreadyStarted);
        }
        if state.player_count() >= state.config.max_players {
            return Err(GameError::GameFull);
        }
        if state.player(&id).is_some() {
            return Err(GameError::DuplicateId);
        }

        let mut next = state.clone();
        debug!("seated {id} at position {}", next.player_count());
        next.players.push(Player::new(id, name));
        next.version += 1;
        Ok(next)
    }

    /// Shuffle, lay out the queens, deal the hands and pick who starts.
    pub fn start_game(&self, state: &GameState) -> Result<GameState> {
        if state.phase != Phase::Waiting {
            return Err(GameError::GameAlreadyStarted);
        }
        if state.player_count() < state.config.min_players {
            return Err(GameError::TooFewPlayers);
        }

        let mut next = state.clone();
        next.sleeping = catalog::shuffled_queens(&mut next.rng).into_iter().map(Some).collect();
        next.deck = DeckManager::new(catalog::shuffled_deck(&mut next.rng));

        // One card at a time, round the table.
        for _ in 0..next.config.hand_size {
            for seat in 0..next.player_count() {
                next.draw_into(seat, 1);
            }
        }

        next.current = next.rng.gen_range_usize(0..next.player_count());
        next.phase = Phase::Playing;
        next.version += 1;

        info!(
            "game started with {} players, {} to move",
            next.player_count(),
            next.players[next.current].id
        );
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seated(engine: &SleepingQueens, n: usize) -> GameState {
        let mut state = engine.create_game(Some(9));
        for i in 0..n {
            state = engine
                .add_player(&state, PlayerId::new(format!("p{i}")), format!("P{i}"))
                .unwrap();
        }
        state
    }

    #[test]
    fn test_new_rejects_bad_config() {
        assert!(SleepingQueens::new(GameConfig::default().with_max_players(9)).is_err());
        assert!(SleepingQueens::new(GameConfig::default()).is_ok());
    }

    #[test]
    fn test_add_player_errors() {
        let engine = SleepingQueens::new(GameConfig::default().with_max_players(2)).unwrap();
        let state = seated(&engine, 1);

        assert_eq!(
            engine.add_player(&state, PlayerId::from("p0"), "again").unwrap_err(),
            GameError::DuplicateId
        );

        let state = engine.add_player(&state, PlayerId::from("p1"), "P1").unwrap();
        assert_eq!(state.version, 2);
        assert_eq!(
            engine.add_player(&state, PlayerId::from("p2"), "P2").unwrap_err(),
            GameError::GameFull
        );
    }

    #[test]
    fn test_start_needs_two() {
        let engine = SleepingQueens::default();
        let state = seated(&engine, 1);
        assert_eq!(engine.start_game(&state).unwrap_err(), GameError::TooFewPlayers);
    }

    #[test]
    fn test_start_deals_and_locks_seating() {
        let engine = SleepingQueens::default();
        let state = engine.start_game(&seated(&engine, 3)).unwrap();

        assert_eq!(state.phase, Phase::Playing);
        assert!(state.current < 3);
        assert_eq!(state.deck.draw_size(), catalog::DECK_SIZE - 15);
        assert_eq!(state.total_cards(), catalog::DECK_SIZE);
        assert_eq!(state.total_queens(), catalog::QUEEN_COUNT);

        assert_eq!(engine.start_game(&state).unwrap_err(), GameError::GameAlreadyStarted);
        assert_eq!(
            engine.add_player(&state, PlayerId::from("late"), "Late").unwrap_err(),
            GameError::GameAlreadyStarted
        );
    }

    #[test]
    fn test_same_seed_same_deal() {
        let engine = SleepingQueens::default();
        let a = engine.start_game(&seated(&engine, 4)).unwrap();
        let b = engine.start_game(&seated(&engine, 4)).unwrap();
        assert_eq!(a, b);
    }
}
