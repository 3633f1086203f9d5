//! Game configuration.
//!
//! Rule-table values that a table host may tune: seat limits, hand size,
//! the length of the Knight/Potion defense window and the win thresholds.
//! The configuration is stored inside every snapshot so a game keeps the
//! rules it was created with.

use serde::{Deserialize, Serialize};

use crate::cards::catalog::DECK_SIZE;
use crate::error::{GameError, Result};

/// Most seats the standard deck supports.
pub const MAX_SUPPORTED_PLAYERS: usize = 5;

/// Game configuration.
///
/// ## Example
///
/// ```
/// use sleeping_queens::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_max_players(4)
///     .with_defense_window_ms(5_000);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.queens_to_win(4), 4);
/// assert_eq!(config.points_to_win(2), 50);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Players required before the game can start.
    pub min_players: usize,

    /// Seats available.
    pub max_players: usize,

    /// Cards each hand is refilled to.
    pub hand_size: usize,

    /// Length of the Knight/Potion defense window, in milliseconds.
    pub defense_window_ms: u64,

    /// Player count from which the "large game" thresholds apply.
    pub large_game_from: usize,

    /// Queens needed to win a small game.
    pub small_game_queens: usize,

    /// Points needed to win a small game.
    pub small_game_points: u32,

    /// Queens needed to win a large game.
    pub large_game_queens: usize,

    /// Points needed to win a large game.
    pub large_game_points: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: MAX_SUPPORTED_PLAYERS,
            hand_size: 5,
            defense_window_ms: 10_000,
            large_game_from: 4,
            small_game_queens: 5,
            small_game_points: 50,
            large_game_queens: 4,
            large_game_points: 40,
        }
    }
}

impl GameConfig {
    /// Set the seat limit.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    /// Set the minimum player count.
    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }

    /// Set the defense window length.
    #[must_use]
    pub fn with_defense_window_ms(mut self, ms: u64) -> Self {
        self.defense_window_ms = ms;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<()> {
        if self.min_players < 2 {
            return Err(GameError::InvalidConfig("min_players must be at least 2"));
        }
        if self.max_players < self.min_players {
            return Err(GameError::InvalidConfig("max_players below min_players"));
        }
        if self.max_players > MAX_SUPPORTED_PLAYERS {
            return Err(GameError::InvalidConfig("too many seats for the standard deck"));
        }
        if self.hand_size == 0 {
            return Err(GameError::InvalidConfig("hand_size must be positive"));
        }
        if self.hand_size * self.max_players > DECK_SIZE {
            return Err(GameError::InvalidConfig("hands do not fit in the standard deck"));
        }
        Ok(())
    }

    /// Queens needed to win with `player_count` players.
    #[must_use]
    pub fn queens_to_win(&self, player_count: usize) -> usize {
        if player_count >= self.large_game_from {
            self.large_game_queens
        } else {
            self.small_game_queens
        }
    }

    /// Points needed to win with `player_count` players.
    #[must_use]
    pub fn points_to_win(&self, player_count: usize) -> u32 {
        if player_count >= self.large_game_from {
            self.large_game_points
        } else {
            self.small_game_points
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_thresholds_by_player_count() {
        let config = GameConfig::default();

        assert_eq!(config.queens_to_win(2), 5);
        assert_eq!(config.queens_to_win(3), 5);
        assert_eq!(config.queens_to_win(4), 4);
        assert_eq!(config.queens_to_win(5), 4);

        assert_eq!(config.points_to_win(3), 50);
        assert_eq!(config.points_to_win(4), 40);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(GameConfig::default().with_min_players(1).validate().is_err());
        assert!(GameConfig::default().with_max_players(6).validate().is_err());
        assert!(GameConfig::default()
            .with_min_players(4)
            .with_max_players(3)
            .validate()
            .is_err());
        assert!(GameConfig::default().with_hand_size(0).validate().is_err());
        assert!(GameConfig::default().with_hand_size(14).validate().is_err());
        assert!(GameConfig::default().with_hand_size(13).validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default().with_defense_window_ms(2_500);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
