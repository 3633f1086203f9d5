//! Win evaluation.
//!
//! Two ways to end the game, checked in this order:
//! 1. A player reaches the queen-count or point threshold for the table size.
//! 2. The grid is empty: highest score wins, ties broken by queen count,
//!    a remaining tie is shared.

use crate::core::player::Player;
use crate::core::state::GameState;
use crate::rules::GameResult;

/// Whether `player` has reached a threshold for this table size.
#[must_use]
pub fn threshold_reached(state: &GameState, player: &Player) -> bool {
    let n = state.player_count();
    player.queen_count() >= state.config.queens_to_win(n)
        || player.score() >= state.config.points_to_win(n)
}

/// Evaluate the snapshot after a completed move by the player at `actor`.
///
/// The actor is checked first, then the other seats in turn order.
#[must_use]
pub fn evaluate(state: &GameState, actor: usize) -> Option<GameResult> {
    let n = state.player_count();
    if n == 0 {
        return None;
    }

    let by_threshold = (0..n)
        .map(|offset| &state.players[(actor + offset) % n])
        .find(|p| threshold_reached(state, p));
    if let Some(player) = by_threshold {
        return Some(GameResult::Winner(player.id.clone()));
    }

    if state.sleeping_count() == 0 {
        return best_by_score(state);
    }

    None
}

/// Highest score, then most queens; equal on both is a shared result.
fn best_by_score(state: &GameState) -> Option<GameResult> {
    let key = |p: &Player| (p.score(), p.queen_count());
    let best = state.players.iter().map(key).max()?;

    let mut leaders: Vec<_> = state
        .players
        .iter()
        .filter(|p| key(p) == best)
        .map(|p| p.id.clone())
        .collect();

    if leaders.len() == 1 {
        leaders.pop().map(GameResult::Winner)
    } else {
        Some(GameResult::Winners(leaders))
    }
}
