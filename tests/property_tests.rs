//! Property-based tests over random playouts.
//!
//! Each case starts a seeded game and picks moves from `legal_moves`
//! with proptest-chosen indices.

#![allow(clippy::unwrap_used)]

mod common;

use common::*;
use proptest::prelude::*;
use sleeping_queens::cards::QueenPower;
use sleeping_queens::core::{GameState, Interrupt, Move, MoveKind, Phase, PlayerId};
use sleeping_queens::rules::{RulesEngine, SleepingQueens};

/// Whoever the engine is waiting on.
fn actor(state: &GameState) -> Option<PlayerId> {
    match state.interrupt.responder() {
        Some(id) => Some(id.clone()),
        None => state.current_player().map(|p| p.id.clone()),
    }
}

/// Turn moves after which the pointer must advance exactly one seat.
fn advances_one_seat(before: &GameState, mv: &Move, after: &GameState) -> bool {
    match mv.kind {
        MoveKind::Discard { .. } => true,
        MoveKind::PlayKing { .. } => after.interrupt.is_none() && before.interrupt.is_none(),
        _ => false,
    }
}

fn playout(
    engine: &SleepingQueens,
    players: usize,
    seed: u64,
    picks: &[usize],
) -> Vec<(GameState, Move)> {
    let mut state = started(engine, players, seed);
    let mut steps = Vec::new();
    for &pick in picks {
        if state.phase != Phase::Playing {
            break;
        }
        let Some(who) = actor(&state) else { break };
        let moves = engine.legal_moves(&state, &who);
        let mv = moves[pick % moves.len()].clone();
        let next = engine.submit_move(&state, &mv).unwrap();
        steps.push((state, mv));
        state = next;
    }
    steps
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Queens and cards are never created or lost.
    #[test]
    fn prop_conservation(
        players in 2usize..=5,
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 1..150)
    ) {
        let engine = engine();
        for (state, _) in playout(&engine, players, seed, &picks) {
            prop_assert_eq!(state.total_cards(), TOTAL_CARDS);
            prop_assert_eq!(state.total_queens(), TOTAL_QUEENS);
            prop_assert_eq!(state.sleeping.len(), TOTAL_QUEENS);
        }
    }

    /// Nobody ever holds both the Cat and the Dog.
    #[test]
    fn prop_cat_dog_exclusive(
        players in 2usize..=5,
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 1..150)
    ) {
        let engine = engine();
        for (state, _) in playout(&engine, players, seed, &picks) {
            for player in &state.players {
                let both = player.has_power(QueenPower::Cat) && player.has_power(QueenPower::Dog);
                prop_assert!(!both);
                prop_assert!(player.queens.iter().all(|q| q.awake));
            }
            prop_assert!(state.sleeping_queens().all(|q| !q.awake));
        }
    }

    /// Discards and plain King plays pass the turn to the next seat.
    #[test]
    fn prop_turn_monotonic(
        players in 2usize..=5,
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 1..100)
    ) {
        let engine = engine();
        let steps = playout(&engine, players, seed, &picks);
        for pair in steps.windows(2) {
            let (before, mv) = &pair[0];
            let (after, _) = &pair[1];
            if advances_one_seat(before, mv, after) {
                prop_assert_eq!(after.current, (before.current + 1) % players);
            }
            if matches!(mv.kind, MoveKind::PlayJester { .. }) && after.interrupt.is_none() {
                prop_assert_eq!(after.current, before.current);
            }
        }
    }

    /// Every enumerated move validates, and a rejected move changes nothing.
    #[test]
    fn prop_legal_moves_validate_and_rejections_are_pure(
        players in 2usize..=5,
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 1..60)
    ) {
        let engine = engine();
        for (state, _) in playout(&engine, players, seed, &picks) {
            for player in &state.players {
                for mv in engine.legal_moves(&state, &player.id) {
                    prop_assert_eq!(engine.is_valid_move(&state, &mv), Ok(()));
                }
            }

            // Everybody except the expected actor is turned away.
            let expected = actor(&state);
            for player in state.players.iter().filter(|p| Some(&p.id) != expected.as_ref()) {
                let card = player.hand[0].id;
                let before = state.clone();
                let stray = Move::discard(player.id.clone(), &[card]);
                prop_assert!(engine.submit_move(&state, &stray).is_err());
                prop_assert_eq!(&state, &before);
            }
        }
    }

    /// At most one interrupt, and only while the game is in play.
    #[test]
    fn prop_interrupt_only_while_playing(
        players in 2usize..=5,
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 1..150)
    ) {
        let engine = engine();
        for (state, _) in playout(&engine, players, seed, &picks) {
            if !matches!(state.interrupt, Interrupt::None) {
                prop_assert_eq!(state.phase, Phase::Playing);
                prop_assert!(state.interrupt.responder().and_then(|id| state.player(id)).is_some());
            }
        }
    }

    /// Replaying the recorded moves reproduces the final snapshot.
    #[test]
    fn prop_replay_deterministic(
        players in 2usize..=5,
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 1..80)
    ) {
        let engine = engine();
        let start = started(&engine, players, seed);
        let steps = playout(&engine, players, seed, &picks);
        if let Some((last, mv)) = steps.last() {
            let expected = engine.submit_move(last, mv).unwrap();
            let moves: Vec<Move> = steps.iter().map(|(_, mv)| mv.clone()).collect();
            prop_assert_eq!(engine.replay(&start, &moves).unwrap(), expected);
        }
    }
}
